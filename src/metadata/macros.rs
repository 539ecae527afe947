/// Generates a getter and a trimming setter for each listed `String` field.
///
/// The setter stores the trimmed text, so blank input resets the field to
/// the empty default.
macro_rules! text_accessors {
    ($($field:ident, $setter:ident => $what:literal;)+) => {
        $(
            #[doc = concat!("Returns the ", $what, "; never absent but may be empty.")]
            pub fn $field(&self) -> &str {
                &self.$field
            }

            #[doc = concat!("Assigns the ", $what, " after trimming; blank text clears it.")]
            pub fn $setter(&mut self, value: impl AsRef<str>) {
                self.$field = value.as_ref().trim().to_string();
            }
        )+
    };
}

pub(crate) use text_accessors;
