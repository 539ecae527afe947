use anyhow::{Context, Result};
use log::info;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use socatmeta::cdiac::CdiacReader;
use socatmeta::ocads::OcadsWriter;

use super::config::Config;

/// Default output path: `<stem>.ocads.xml` next to the input
pub(crate) fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}.ocads.xml", stem))
}

/// Write a file through a temporary file in the same directory, replacing
/// `path` only once everything was written
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    write(&mut temp)?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Translate a CDIAC document into an OCADS document
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    force: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let config = Config::load(config.as_deref())?;
    let output = output.unwrap_or_else(|| default_output(&input));
    let overwrite = force || config.output.overwrite.unwrap_or(false);
    let json = json || config.output.json.unwrap_or(false);
    let json_output = output.with_extension("json");

    if !overwrite {
        for path in [Some(&output), json.then_some(&json_output)].into_iter().flatten() {
            if path.exists() {
                anyhow::bail!(
                    "Output file already exists: {} (use --force to replace it)",
                    path.display()
                );
            }
        }
    }

    info!("CDIAC to OCADS");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());

    let mut reader = CdiacReader::open(&input)
        .with_context(|| format!("Failed to read CDIAC document {}", input.display()))?;
    config.apply_to(reader.classifier_mut())?;
    let metadata = reader.create_socat_metadata();

    write_atomically(&output, |file| {
        let mut writer = OcadsWriter::new(BufWriter::new(file));
        writer.write_ocads_xml(&metadata)?;
        writer.finish()?;
        Ok(())
    })?;

    if json {
        let text = metadata.to_json()?;
        write_atomically(&json_output, |file| {
            file.write_all(text.as_bytes())?;
            Ok(())
        })?;
        info!("JSON:   {}", json_output.display());
    }

    info!(
        "Translated {} variables and {} instruments",
        metadata.variables.len(),
        metadata.instruments.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(Path::new("data/33RO20150114.xml")),
            PathBuf::from("data/33RO20150114.ocads.xml")
        );
        assert_eq!(default_output(Path::new("cruise")), PathBuf::from("cruise.ocads.xml"));
    }

    #[test]
    fn test_write_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_atomically(&path, |file| {
            file.write_all(b"first")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        let result = write_atomically(&path, |_| anyhow::bail!("no content"));
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_refuses_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cruise.xml");
        std::fs::write(&input, "<x_tags/>").unwrap();
        let output = dir.path().join("cruise.ocads.xml");
        std::fs::write(&output, "keep").unwrap();

        let err = run(input.clone(), None, None, false, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep");

        run(input, None, None, false, true).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("<metadata>"));
    }
}
