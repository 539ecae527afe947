//! Built-in normalized column-name keys for CDIAC data columns.

use super::VarType;

/// Normalized column-name keys and the variable type each one denotes.
///
/// Keys are in the form produced by [`super::normalize_column_name`].
pub(super) const DEFAULT_COLUMN_TYPES: &[(&str, VarType)] = &[
    ("fco2eq", VarType::Fco2WaterEqu),
    ("fco2equ", VarType::Fco2WaterEqu),
    ("fco2equatm", VarType::Fco2WaterEqu),
    ("fco2equi", VarType::Fco2WaterEqu),
    ("fco2equil", VarType::Fco2WaterEqu),
    ("fco2equilwet", VarType::Fco2WaterEqu),
    ("fco2equiuatm", VarType::Fco2WaterEqu),
    ("fco2equiwet", VarType::Fco2WaterEqu),
    ("fco2equiwetuatm", VarType::Fco2WaterEqu),
    ("fco2equuatm", VarType::Fco2WaterEqu),
    ("fco2equw", VarType::Fco2WaterEqu),
    ("fco2equwet", VarType::Fco2WaterEqu),
    ("fco2equwetuatm", VarType::Fco2WaterEqu),
    ("fco2eqwet", VarType::Fco2WaterEqu),
    ("fco2eqwetuatm", VarType::Fco2WaterEqu),
    ("fco2sweq", VarType::Fco2WaterEqu),
    ("fco2swequ", VarType::Fco2WaterEqu),
    ("fco2swequatm", VarType::Fco2WaterEqu),
    ("fco2swequi", VarType::Fco2WaterEqu),
    ("fco2swequiuatm", VarType::Fco2WaterEqu),
    ("fco2swequiwet", VarType::Fco2WaterEqu),
    ("fco2swequiwetuatm", VarType::Fco2WaterEqu),
    ("fco2swequtempuatm", VarType::Fco2WaterEqu),
    ("fco2swequtuatm", VarType::Fco2WaterEqu),
    ("fco2swequuatm", VarType::Fco2WaterEqu),
    ("fco2swequwet", VarType::Fco2WaterEqu),
    ("fco2swequwetuatm", VarType::Fco2WaterEqu),
    ("fco2sweqwet", VarType::Fco2WaterEqu),
    ("fco2sweqwetuatm", VarType::Fco2WaterEqu),
    ("fco2swteq", VarType::Fco2WaterEqu),
    ("fco2swtequ", VarType::Fco2WaterEqu),
    ("fco2swtequatm", VarType::Fco2WaterEqu),
    ("fco2swtequi", VarType::Fco2WaterEqu),
    ("fco2swtequiuatm", VarType::Fco2WaterEqu),
    ("fco2swtequiwet", VarType::Fco2WaterEqu),
    ("fco2swtequiwetuatm", VarType::Fco2WaterEqu),
    ("fco2swtequuatm", VarType::Fco2WaterEqu),
    ("fco2swtequwet", VarType::Fco2WaterEqu),
    ("fco2swtequwetuatm", VarType::Fco2WaterEqu),
    ("fco2swteqwet", VarType::Fco2WaterEqu),
    ("fco2swteqwetuatm", VarType::Fco2WaterEqu),
    ("fco2teq", VarType::Fco2WaterEqu),
    ("fco2tequ", VarType::Fco2WaterEqu),
    ("fco2tequatm", VarType::Fco2WaterEqu),
    ("fco2tequi", VarType::Fco2WaterEqu),
    ("fco2tequiuatm", VarType::Fco2WaterEqu),
    ("fco2tequiwet", VarType::Fco2WaterEqu),
    ("fco2tequiwetuatm", VarType::Fco2WaterEqu),
    ("fco2tequuatm", VarType::Fco2WaterEqu),
    ("fco2tequwet", VarType::Fco2WaterEqu),
    ("fco2tequwetuatm", VarType::Fco2WaterEqu),
    ("fco2teqwet", VarType::Fco2WaterEqu),
    ("fco2teqwetuatm", VarType::Fco2WaterEqu),
    ("fco2watequatm", VarType::Fco2WaterEqu),
    ("fco2watereq", VarType::Fco2WaterEqu),
    ("fco2waterequ", VarType::Fco2WaterEqu),
    ("fco2waterequatm", VarType::Fco2WaterEqu),
    ("fco2waterequi", VarType::Fco2WaterEqu),
    ("fco2waterequiuatm", VarType::Fco2WaterEqu),
    ("fco2waterequiwet", VarType::Fco2WaterEqu),
    ("fco2waterequiwetuatm", VarType::Fco2WaterEqu),
    ("fco2waterequuatm", VarType::Fco2WaterEqu),
    ("fco2waterequwet", VarType::Fco2WaterEqu),
    ("fco2waterequwetuatm", VarType::Fco2WaterEqu),
    ("fco2watereqwet", VarType::Fco2WaterEqu),
    ("fco2watereqwetuatm", VarType::Fco2WaterEqu),
    ("fco2waterteq", VarType::Fco2WaterEqu),
    ("fco2watertequ", VarType::Fco2WaterEqu),
    ("fco2watertequatm", VarType::Fco2WaterEqu),
    ("fco2watertequi", VarType::Fco2WaterEqu),
    ("fco2watertequiuatm", VarType::Fco2WaterEqu),
    ("fco2watertequiwet", VarType::Fco2WaterEqu),
    ("fco2watertequiwetuatm", VarType::Fco2WaterEqu),
    ("fco2watertequuatm", VarType::Fco2WaterEqu),
    ("fco2watertequwet", VarType::Fco2WaterEqu),
    ("fco2watertequwetuatm", VarType::Fco2WaterEqu),
    ("fco2waterteqwet", VarType::Fco2WaterEqu),
    ("fco2waterteqwetuatm", VarType::Fco2WaterEqu),
    ("fco2wequil", VarType::Fco2WaterEqu),
    ("co2fsst", VarType::Fco2WaterSst),
    ("f1013uatm", VarType::Fco2WaterSst),
    ("fco2", VarType::Fco2WaterSst),
    ("fco21013uatm", VarType::Fco2WaterSst),
    ("fco2atmpressuresstcorruatm", VarType::Fco2WaterSst),
    ("fco2forairinequilibriumwithseawateratseasurfacetemperatureatm", VarType::Fco2WaterSst),
    ("fco2inseawater", VarType::Fco2WaterSst),
    ("fco2inseawateruatm", VarType::Fco2WaterSst),
    ("fco2insitu", VarType::Fco2WaterSst),
    ("fco2insituwet", VarType::Fco2WaterSst),
    ("fco2ocesstuatm", VarType::Fco2WaterSst),
    ("fco2recuatm", VarType::Fco2WaterSst),
    ("fco2seatsst100humidityatm", VarType::Fco2WaterSst),
    ("fco2seauatm", VarType::Fco2WaterSst),
    ("fco2seawetistempuatm", VarType::Fco2WaterSst),
    ("fco2seawettinsitu", VarType::Fco2WaterSst),
    ("fco2sst", VarType::Fco2WaterSst),
    ("fco2sst100humuatm", VarType::Fco2WaterSst),
    ("fco2sstuatm", VarType::Fco2WaterSst),
    ("fco2sstwet", VarType::Fco2WaterSst),
    ("fco2sstwetuatm", VarType::Fco2WaterSst),
    ("fco2sw", VarType::Fco2WaterSst),
    ("fco2swatm", VarType::Fco2WaterSst),
    ("fco2swsatuatm", VarType::Fco2WaterSst),
    ("fco2swsst", VarType::Fco2WaterSst),
    ("fco2swsstuatm", VarType::Fco2WaterSst),
    ("fco2swsstwet", VarType::Fco2WaterSst),
    ("fco2swsstwetuatm", VarType::Fco2WaterSst),
    ("fco2swsat", VarType::Fco2WaterSst),
    ("fco2swuatm", VarType::Fco2WaterSst),
    ("fco2swuatmuatm", VarType::Fco2WaterSst),
    ("fco2uatm", VarType::Fco2WaterSst),
    ("fco2w", VarType::Fco2WaterSst),
    ("fco2wat", VarType::Fco2WaterSst),
    ("fco2watersst", VarType::Fco2WaterSst),
    ("fco2watersstuatm", VarType::Fco2WaterSst),
    ("fco2watersstwet", VarType::Fco2WaterSst),
    ("fco2watersstwetatm", VarType::Fco2WaterSst),
    ("fco2watersstwetuatm", VarType::Fco2WaterSst),
    ("fco2wateruatm", VarType::Fco2WaterSst),
    ("fco2watm", VarType::Fco2WaterSst),
    ("fco2watsstuatm", VarType::Fco2WaterSst),
    ("fco2watuatm", VarType::Fco2WaterSst),
    ("fco2wetswuatm", VarType::Fco2WaterSst),
    ("fco2winsitu", VarType::Fco2WaterSst),
    ("fco2wsst100humuatm", VarType::Fco2WaterSst),
    ("fco2wsstuatm", VarType::Fco2WaterSst),
    ("fco2wuatm", VarType::Fco2WaterSst),
    ("fpatm", VarType::Fco2WaterSst),
    ("co2pequ", VarType::Pco2WaterEqu),
    ("pco2eq", VarType::Pco2WaterEqu),
    ("pco2equ", VarType::Pco2WaterEqu),
    ("pco2equatm", VarType::Pco2WaterEqu),
    ("pco2equi", VarType::Pco2WaterEqu),
    ("pco2equiuatm", VarType::Pco2WaterEqu),
    ("pco2equiwet", VarType::Pco2WaterEqu),
    ("pco2equiwetuatm", VarType::Pco2WaterEqu),
    ("pco2equuatm", VarType::Pco2WaterEqu),
    ("pco2equwet", VarType::Pco2WaterEqu),
    ("pco2equwetuatm", VarType::Pco2WaterEqu),
    ("pco2eqwet", VarType::Pco2WaterEqu),
    ("pco2eqwetuatm", VarType::Pco2WaterEqu),
    ("pco2sweq", VarType::Pco2WaterEqu),
    ("pco2swequ", VarType::Pco2WaterEqu),
    ("pco2swequatm", VarType::Pco2WaterEqu),
    ("pco2swequi", VarType::Pco2WaterEqu),
    ("pco2swequiuatm", VarType::Pco2WaterEqu),
    ("pco2swequiwet", VarType::Pco2WaterEqu),
    ("pco2swequiwetuatm", VarType::Pco2WaterEqu),
    ("pco2swequuatm", VarType::Pco2WaterEqu),
    ("pco2swequwet", VarType::Pco2WaterEqu),
    ("pco2swequwetuatm", VarType::Pco2WaterEqu),
    ("pco2sweqwet", VarType::Pco2WaterEqu),
    ("pco2sweqwetuatm", VarType::Pco2WaterEqu),
    ("pco2swteq", VarType::Pco2WaterEqu),
    ("pco2swtequ", VarType::Pco2WaterEqu),
    ("pco2swtequatm", VarType::Pco2WaterEqu),
    ("pco2swtequi", VarType::Pco2WaterEqu),
    ("pco2swtequiuatm", VarType::Pco2WaterEqu),
    ("pco2swtequiwet", VarType::Pco2WaterEqu),
    ("pco2swtequuatm", VarType::Pco2WaterEqu),
    ("pco2swtequwet", VarType::Pco2WaterEqu),
    ("pco2swtequwetuatm", VarType::Pco2WaterEqu),
    ("pco2swteqwet", VarType::Pco2WaterEqu),
    ("pco2swteqwetuatm", VarType::Pco2WaterEqu),
    ("pco2teq", VarType::Pco2WaterEqu),
    ("pco2tequ", VarType::Pco2WaterEqu),
    ("pco2tequatm", VarType::Pco2WaterEqu),
    ("pco2tequi", VarType::Pco2WaterEqu),
    ("pco2tequiuatm", VarType::Pco2WaterEqu),
    ("pco2tequiwet", VarType::Pco2WaterEqu),
    ("pco2tequiwetuatm", VarType::Pco2WaterEqu),
    ("pco2tequuatm", VarType::Pco2WaterEqu),
    ("pco2tequwet", VarType::Pco2WaterEqu),
    ("pco2tequwetuatm", VarType::Pco2WaterEqu),
    ("pco2teqwet", VarType::Pco2WaterEqu),
    ("pco2teqwetuatm", VarType::Pco2WaterEqu),
    ("pco2uatmfromproco2sn2909745pco2uatm", VarType::Pco2WaterEqu),
    ("pco2watequatm", VarType::Pco2WaterEqu),
    ("pco2watereq", VarType::Pco2WaterEqu),
    ("pco2waterequ", VarType::Pco2WaterEqu),
    ("pco2waterequatm", VarType::Pco2WaterEqu),
    ("pco2waterequi", VarType::Pco2WaterEqu),
    ("pco2waterequi100humidity", VarType::Pco2WaterEqu),
    ("pco2waterequiuatm", VarType::Pco2WaterEqu),
    ("pco2waterequiwet", VarType::Pco2WaterEqu),
    ("pco2waterequiwetuatm", VarType::Pco2WaterEqu),
    ("pco2waterequuatm", VarType::Pco2WaterEqu),
    ("pco2waterequwet", VarType::Pco2WaterEqu),
    ("pco2waterequwetatm", VarType::Pco2WaterEqu),
    ("pco2waterequwetuatm", VarType::Pco2WaterEqu),
    ("pco2watereqwet", VarType::Pco2WaterEqu),
    ("pco2watereqwetuatm", VarType::Pco2WaterEqu),
    ("pco2waterteq", VarType::Pco2WaterEqu),
    ("pco2watertequ", VarType::Pco2WaterEqu),
    ("pco2watertequatm", VarType::Pco2WaterEqu),
    ("pco2watertequi", VarType::Pco2WaterEqu),
    ("pco2watertequiuatm", VarType::Pco2WaterEqu),
    ("pco2watertequiwet", VarType::Pco2WaterEqu),
    ("pco2watertequuatm", VarType::Pco2WaterEqu),
    ("pco2watertequwet", VarType::Pco2WaterEqu),
    ("pco2watertequwetuatm", VarType::Pco2WaterEqu),
    ("pco2waterteqwet", VarType::Pco2WaterEqu),
    ("pco2waterteqwetuatm", VarType::Pco2WaterEqu),
    ("1mproco2concuatmsn299745", VarType::Pco2WaterSst),
    ("co2", VarType::Pco2WaterSst),
    ("co2ppm", VarType::Pco2WaterSst),
    ("co2psst", VarType::Pco2WaterSst),
    ("pco2", VarType::Pco2WaterSst),
    ("pco2380742525", VarType::Pco2WaterSst),
    ("pco2atinsitutempintaket", VarType::Pco2WaterSst),
    ("pco2atminwater", VarType::Pco2WaterSst),
    ("pco2forairinequilibriumwithseawateratseasurfacetemperatureatm", VarType::Pco2WaterSst),
    ("pco2headuatam", VarType::Pco2WaterSst),
    ("pco2headuatm", VarType::Pco2WaterSst),
    ("pco2icosatm", VarType::Pco2WaterSst),
    ("pco2inseawaterwet", VarType::Pco2WaterSst),
    ("pco2inseawaterwetppm", VarType::Pco2WaterSst),
    ("pco2insituatm", VarType::Pco2WaterSst),
    ("pco2insitutmatm", VarType::Pco2WaterSst),
    ("pco2mol", VarType::Pco2WaterSst),
    ("pco2ocesstuatm", VarType::Pco2WaterSst),
    ("pco2seatsst100humidityatm", VarType::Pco2WaterSst),
    ("pco2seawetistempuatm", VarType::Pco2WaterSst),
    ("pco2sst", VarType::Pco2WaterSst),
    ("pco2sst100humuatm", VarType::Pco2WaterSst),
    ("pco2sstuatm", VarType::Pco2WaterSst),
    ("pco2sstwet", VarType::Pco2WaterSst),
    ("pco2sstwetuatm", VarType::Pco2WaterSst),
    ("pco2sw", VarType::Pco2WaterSst),
    ("pco2swsatuatm", VarType::Pco2WaterSst),
    ("pco2swsst", VarType::Pco2WaterSst),
    ("pco2swsstuatm", VarType::Pco2WaterSst),
    ("pco2swsstwet", VarType::Pco2WaterSst),
    ("pco2swsstwetuatm", VarType::Pco2WaterSst),
    ("pco2swuatm", VarType::Pco2WaterSst),
    ("pco2swwet", VarType::Pco2WaterSst),
    ("pco2tailuatm", VarType::Pco2WaterSst),
    ("pco2uatm", VarType::Pco2WaterSst),
    ("pco2uatminwater", VarType::Pco2WaterSst),
    ("pco2wat", VarType::Pco2WaterSst),
    ("pco2watersst", VarType::Pco2WaterSst),
    ("pco2watersst100humidityuatm", VarType::Pco2WaterSst),
    ("pco2watersstuatm", VarType::Pco2WaterSst),
    ("pco2watersstwet", VarType::Pco2WaterSst),
    ("pco2watersstwetatm", VarType::Pco2WaterSst),
    ("pco2watersstwetuatm", VarType::Pco2WaterSst),
    ("pco2wateruatm", VarType::Pco2WaterSst),
    ("pco2watsstuatm", VarType::Pco2WaterSst),
    ("pco2watuamt", VarType::Pco2WaterSst),
    ("pco2watuatm", VarType::Pco2WaterSst),
    ("pco2wetsst", VarType::Pco2WaterSst),
    ("pco2wsst100humuatm", VarType::Pco2WaterSst),
    ("pco2wsstuatm", VarType::Pco2WaterSst),
    ("prookconc", VarType::Pco2WaterSst),
    ("sami521mpco2", VarType::Pco2WaterSst),
    ("seawaterpco2uatm", VarType::Pco2WaterSst),
    ("sspco2", VarType::Pco2WaterSst),
    ("co2umm", VarType::Xco2WaterEqu),
    ("co2x", VarType::Xco2WaterEqu),
    ("molefractionofco2inairfromequilibratormolmol", VarType::Xco2WaterEqu),
    ("pco2wuatm", VarType::Xco2WaterEqu),
    ("vco2sw", VarType::Xco2WaterEqu),
    ("vco2swppm", VarType::Xco2WaterEqu),
    ("xco2", VarType::Xco2WaterEqu),
    ("xco2cal", VarType::Xco2WaterEqu),
    ("xco2cor", VarType::Xco2WaterEqu),
    ("xco2dryppm", VarType::Xco2WaterEqu),
    ("xco2dryumolmol", VarType::Xco2WaterEqu),
    ("xco2eq", VarType::Xco2WaterEqu),
    ("xco2eqdry", VarType::Xco2WaterEqu),
    ("xco2eqdryppm", VarType::Xco2WaterEqu),
    ("xco2eqdryumolmol", VarType::Xco2WaterEqu),
    ("xco2eqmicromolmol", VarType::Xco2WaterEqu),
    ("xco2eqppm", VarType::Xco2WaterEqu),
    ("xco2eqppmppm", VarType::Xco2WaterEqu),
    ("xco2equ", VarType::Xco2WaterEqu),
    ("xco2equdry", VarType::Xco2WaterEqu),
    ("xco2equdryppm", VarType::Xco2WaterEqu),
    ("xco2equdryumolmol", VarType::Xco2WaterEqu),
    ("xco2equi", VarType::Xco2WaterEqu),
    ("xco2equidry", VarType::Xco2WaterEqu),
    ("xco2equidryppm", VarType::Xco2WaterEqu),
    ("xco2equidryumolmol", VarType::Xco2WaterEqu),
    ("xco2equil", VarType::Xco2WaterEqu),
    ("xco2equildry", VarType::Xco2WaterEqu),
    ("xco2equippm", VarType::Xco2WaterEqu),
    ("xco2equitempdryppm", VarType::Xco2WaterEqu),
    ("xco2equiumolmol", VarType::Xco2WaterEqu),
    ("xco2equmolmol", VarType::Xco2WaterEqu),
    ("xco2equmomol", VarType::Xco2WaterEqu),
    ("xco2equppm", VarType::Xco2WaterEqu),
    ("xco2equumolmol", VarType::Xco2WaterEqu),
    ("xco2inseawaterdry", VarType::Xco2WaterEqu),
    ("xco2inseawaterdryuatm", VarType::Xco2WaterEqu),
    ("xco2oceequilumolmol1", VarType::Xco2WaterEqu),
    ("xco2ppm", VarType::Xco2WaterEqu),
    ("xco2sea", VarType::Xco2WaterEqu),
    ("xco2seappm", VarType::Xco2WaterEqu),
    ("xco2seappmdry", VarType::Xco2WaterEqu),
    ("xco2seappmv", VarType::Xco2WaterEqu),
    ("xco2seatteqmolmol", VarType::Xco2WaterEqu),
    ("xco2sw", VarType::Xco2WaterEqu),
    ("xco2sweq", VarType::Xco2WaterEqu),
    ("xco2sweqdry", VarType::Xco2WaterEqu),
    ("xco2sweqdryppm", VarType::Xco2WaterEqu),
    ("xco2sweqdryumolmol", VarType::Xco2WaterEqu),
    ("xco2sweqppm", VarType::Xco2WaterEqu),
    ("xco2swequ", VarType::Xco2WaterEqu),
    ("xco2swequdry", VarType::Xco2WaterEqu),
    ("xco2swequdryppm", VarType::Xco2WaterEqu),
    ("xco2swequdryumolmol", VarType::Xco2WaterEqu),
    ("xco2swequi", VarType::Xco2WaterEqu),
    ("xco2swequidry", VarType::Xco2WaterEqu),
    ("xco2swequidryppm", VarType::Xco2WaterEqu),
    ("xco2swequidryumolmol", VarType::Xco2WaterEqu),
    ("xco2swequippm", VarType::Xco2WaterEqu),
    ("xco2swequiumolmol", VarType::Xco2WaterEqu),
    ("xco2swequmolmol", VarType::Xco2WaterEqu),
    ("xco2swequppm", VarType::Xco2WaterEqu),
    ("xco2swequumolmol", VarType::Xco2WaterEqu),
    ("xco2swppm", VarType::Xco2WaterEqu),
    ("xco2swteq", VarType::Xco2WaterEqu),
    ("xco2swteqdry", VarType::Xco2WaterEqu),
    ("xco2swteqdryppm", VarType::Xco2WaterEqu),
    ("xco2swteqdryumolmol", VarType::Xco2WaterEqu),
    ("xco2swteqppm", VarType::Xco2WaterEqu),
    ("xco2swtequ", VarType::Xco2WaterEqu),
    ("xco2swtequdry", VarType::Xco2WaterEqu),
    ("xco2swtequdryppm", VarType::Xco2WaterEqu),
    ("xco2swtequdryumolmol", VarType::Xco2WaterEqu),
    ("xco2swtequi", VarType::Xco2WaterEqu),
    ("xco2swtequidry", VarType::Xco2WaterEqu),
    ("xco2swtequidryppm", VarType::Xco2WaterEqu),
    ("xco2swtequidryumolmol", VarType::Xco2WaterEqu),
    ("xco2swtequippm", VarType::Xco2WaterEqu),
    ("xco2swtequiumolmol", VarType::Xco2WaterEqu),
    ("xco2swtequmolmol", VarType::Xco2WaterEqu),
    ("xco2swtequppm", VarType::Xco2WaterEqu),
    ("xco2swtequumolmol", VarType::Xco2WaterEqu),
    ("xco2teq", VarType::Xco2WaterEqu),
    ("xco2teqdry", VarType::Xco2WaterEqu),
    ("xco2teqdryppm", VarType::Xco2WaterEqu),
    ("xco2teqdryumolmol", VarType::Xco2WaterEqu),
    ("xco2teqppm", VarType::Xco2WaterEqu),
    ("xco2tequ", VarType::Xco2WaterEqu),
    ("xco2tequdry", VarType::Xco2WaterEqu),
    ("xco2tequdryppm", VarType::Xco2WaterEqu),
    ("xco2tequdryumolmol", VarType::Xco2WaterEqu),
    ("xco2tequi", VarType::Xco2WaterEqu),
    ("xco2tequidry", VarType::Xco2WaterEqu),
    ("xco2tequidryppm", VarType::Xco2WaterEqu),
    ("xco2tequidryumolmol", VarType::Xco2WaterEqu),
    ("xco2tequippm", VarType::Xco2WaterEqu),
    ("xco2tequiumolmol", VarType::Xco2WaterEqu),
    ("xco2tequmolmol", VarType::Xco2WaterEqu),
    ("xco2tequppm", VarType::Xco2WaterEqu),
    ("xco2tequppmv", VarType::Xco2WaterEqu),
    ("xco2tequumolmol", VarType::Xco2WaterEqu),
    ("xco2um", VarType::Xco2WaterEqu),
    ("xco2wat", VarType::Xco2WaterEqu),
    ("xco2wateqppm", VarType::Xco2WaterEqu),
    ("xco2wateqppmv", VarType::Xco2WaterEqu),
    ("xco2watereq", VarType::Xco2WaterEqu),
    ("xco2watereqdry", VarType::Xco2WaterEqu),
    ("xco2watereqdryppm", VarType::Xco2WaterEqu),
    ("xco2watereqdryumolmol", VarType::Xco2WaterEqu),
    ("xco2watereqppm", VarType::Xco2WaterEqu),
    ("xco2waterequ", VarType::Xco2WaterEqu),
    ("xco2waterequdry", VarType::Xco2WaterEqu),
    ("xco2waterequdrymolmol", VarType::Xco2WaterEqu),
    ("xco2waterequdryppm", VarType::Xco2WaterEqu),
    ("xco2waterequdryumolmol", VarType::Xco2WaterEqu),
    ("xco2waterequi", VarType::Xco2WaterEqu),
    ("xco2waterequidry", VarType::Xco2WaterEqu),
    ("xco2waterequidryppm", VarType::Xco2WaterEqu),
    ("xco2waterequidryumolmol", VarType::Xco2WaterEqu),
    ("xco2waterequippm", VarType::Xco2WaterEqu),
    ("xco2waterequitempdryppm", VarType::Xco2WaterEqu),
    ("xco2waterequiumolmol", VarType::Xco2WaterEqu),
    ("xco2waterequmolmol", VarType::Xco2WaterEqu),
    ("xco2waterequppm", VarType::Xco2WaterEqu),
    ("xco2waterequumolmol", VarType::Xco2WaterEqu),
    ("xco2waterteq", VarType::Xco2WaterEqu),
    ("xco2waterteqdry", VarType::Xco2WaterEqu),
    ("xco2waterteqdryppm", VarType::Xco2WaterEqu),
    ("xco2waterteqdryumolmol", VarType::Xco2WaterEqu),
    ("xco2waterteqppm", VarType::Xco2WaterEqu),
    ("xco2watertequ", VarType::Xco2WaterEqu),
    ("xco2watertequdry", VarType::Xco2WaterEqu),
    ("xco2watertequdryppm", VarType::Xco2WaterEqu),
    ("xco2watertequdryumolmol", VarType::Xco2WaterEqu),
    ("xco2watertequi", VarType::Xco2WaterEqu),
    ("xco2watertequidry", VarType::Xco2WaterEqu),
    ("xco2watertequidryppm", VarType::Xco2WaterEqu),
    ("xco2watertequidryumolmol", VarType::Xco2WaterEqu),
    ("xco2watertequippm", VarType::Xco2WaterEqu),
    ("xco2watertequiumolmol", VarType::Xco2WaterEqu),
    ("xco2watertequmolmol", VarType::Xco2WaterEqu),
    ("xco2watertequppm", VarType::Xco2WaterEqu),
    ("xco2watertequumolmol", VarType::Xco2WaterEqu),
    ("xco2watppm", VarType::Xco2WaterEqu),
    ("xco2watumolmol", VarType::Xco2WaterEqu),
    ("xco2wppm", VarType::Xco2WaterEqu),
    ("xco2wumolmol", VarType::Xco2WaterEqu),
    ("co2sw", VarType::Xco2WaterSst),
    ("co2xcor", VarType::Xco2WaterSst),
    ("eq", VarType::Xco2WaterSst),
    ("xco2dryair", VarType::Xco2WaterSst),
    ("xco2dryswppm", VarType::Xco2WaterSst),
    ("xco2forairinequilibriumwiththeseawateratseasurfacetemperatureand101325hpaappliedpressureexpressedasmolmolindryair", VarType::Xco2WaterSst),
    ("xco2ocesstumolmol1", VarType::Xco2WaterSst),
    ("xco2seatsstmolmol", VarType::Xco2WaterSst),
    ("xco2sst", VarType::Xco2WaterSst),
    ("xco2sstdry", VarType::Xco2WaterSst),
    ("xco2sstdryppm", VarType::Xco2WaterSst),
    ("xco2sstdryumolmol", VarType::Xco2WaterSst),
    ("xco2sstppm", VarType::Xco2WaterSst),
    ("xco2sstumolmol", VarType::Xco2WaterSst),
    ("xco2swdry", VarType::Xco2WaterSst),
    ("xco2swdryumolmol", VarType::Xco2WaterSst),
    ("xco2swppmv", VarType::Xco2WaterSst),
    ("xco2swsst", VarType::Xco2WaterSst),
    ("xco2swsstdry", VarType::Xco2WaterSst),
    ("xco2swsstdryppm", VarType::Xco2WaterSst),
    ("xco2swsstdryumolmol", VarType::Xco2WaterSst),
    ("xco2swsstppm", VarType::Xco2WaterSst),
    ("xco2swsstumolmol", VarType::Xco2WaterSst),
    ("xco2swwet", VarType::Xco2WaterSst),
    ("xco2w", VarType::Xco2WaterSst),
    ("xco2watersst", VarType::Xco2WaterSst),
    ("xco2watersstdry", VarType::Xco2WaterSst),
    ("xco2watersstdrymolmol", VarType::Xco2WaterSst),
    ("xco2watersstdryppm", VarType::Xco2WaterSst),
    ("xco2watersstdryumolmol", VarType::Xco2WaterSst),
    ("xco2watersstppm", VarType::Xco2WaterSst),
    ("xco2watersstumolmol", VarType::Xco2WaterSst),
    ("xco2watsstumolmol", VarType::Xco2WaterSst),
    ("xco2watstd", VarType::Xco2WaterSst),
    ("xco2watstdppm", VarType::Xco2WaterSst),
    ("xeq", VarType::Xco2WaterSst),
    ("fco2a", VarType::Fco2AtmActual),
    ("fco2air", VarType::Fco2AtmActual),
    ("fco2airactual", VarType::Fco2AtmActual),
    ("fco2airactualuatm", VarType::Fco2AtmActual),
    ("fco2airatm", VarType::Fco2AtmActual),
    ("fco2airsat", VarType::Fco2AtmActual),
    ("fco2airsatuatm", VarType::Fco2AtmActual),
    ("fco2airuatm", VarType::Fco2AtmActual),
    ("fco2airwet", VarType::Fco2AtmActual),
    ("fco2airwetactual", VarType::Fco2AtmActual),
    ("fco2airwetactualuatm", VarType::Fco2AtmActual),
    ("fco2airwetuatm", VarType::Fco2AtmActual),
    ("fco2atm", VarType::Fco2AtmActual),
    ("fco2atmactual", VarType::Fco2AtmActual),
    ("fco2atmactualuatm", VarType::Fco2AtmActual),
    ("fco2atmuatm", VarType::Fco2AtmActual),
    ("fco2atmwet", VarType::Fco2AtmActual),
    ("fco2atmwetactual", VarType::Fco2AtmActual),
    ("fco2atmwetactualuatm", VarType::Fco2AtmActual),
    ("fco2atmwetuatm", VarType::Fco2AtmActual),
    ("fco2auatm", VarType::Fco2AtmActual),
    ("airfco2", VarType::Fco2AtmInterp),
    ("airfco2cal", VarType::Fco2AtmInterp),
    ("co2fatm", VarType::Fco2AtmInterp),
    ("fco2airinerpuatm", VarType::Fco2AtmInterp),
    ("fco2airinterp", VarType::Fco2AtmInterp),
    ("fco2airinterpuatm", VarType::Fco2AtmInterp),
    ("fco2airwetinterp", VarType::Fco2AtmInterp),
    ("fco2airwetinterpuatm", VarType::Fco2AtmInterp),
    ("fco2atmatm", VarType::Fco2AtmInterp),
    ("fco2atminterp", VarType::Fco2AtmInterp),
    ("fco2atminterpolated", VarType::Fco2AtmInterp),
    ("fco2atminterpolateduatm", VarType::Fco2AtmInterp),
    ("fco2atminterpuatm", VarType::Fco2AtmInterp),
    ("fco2atmuatminterpolateduatm", VarType::Fco2AtmInterp),
    ("fco2atmwetinterp", VarType::Fco2AtmInterp),
    ("fco2atmwetinterpuatm", VarType::Fco2AtmInterp),
    ("atmpco2", VarType::Pco2AtmActual),
    ("pco2air", VarType::Pco2AtmActual),
    ("pco2airactual", VarType::Pco2AtmActual),
    ("pco2airactualuatm", VarType::Pco2AtmActual),
    ("pco2airatm", VarType::Pco2AtmActual),
    ("pco2airsatuatm", VarType::Pco2AtmActual),
    ("pco2airsatutam", VarType::Pco2AtmActual),
    ("pco2airuatm", VarType::Pco2AtmActual),
    ("pco2airwet", VarType::Pco2AtmActual),
    ("pco2airwetactual", VarType::Pco2AtmActual),
    ("pco2airwetactualuatm", VarType::Pco2AtmActual),
    ("pco2airwetuatm", VarType::Pco2AtmActual),
    ("pco2atm", VarType::Pco2AtmActual),
    ("pco2atmactual", VarType::Pco2AtmActual),
    ("pco2atmactualuatm", VarType::Pco2AtmActual),
    ("pco2atmmeasuredintheair", VarType::Pco2AtmActual),
    ("pco2atmuatm", VarType::Pco2AtmActual),
    ("pco2atmwet", VarType::Pco2AtmActual),
    ("pco2atmwetactual", VarType::Pco2AtmActual),
    ("pco2atmwetactualuatm", VarType::Pco2AtmActual),
    ("pco2atmwetuatm", VarType::Pco2AtmActual),
    ("pco2inairwet", VarType::Pco2AtmActual),
    ("pco2inairwetppm", VarType::Pco2AtmActual),
    ("pco2uatmmeasuredintheair", VarType::Pco2AtmActual),
    ("airpco2", VarType::Pco2AtmInterp),
    ("airpco2cal", VarType::Pco2AtmInterp),
    ("atmosphericpco2ppm", VarType::Pco2AtmInterp),
    ("pco2airinterp", VarType::Pco2AtmInterp),
    ("pco2airinterpuatm", VarType::Pco2AtmInterp),
    ("pco2airwetinterp", VarType::Pco2AtmInterp),
    ("pco2airwetinterpuatm", VarType::Pco2AtmInterp),
    ("pco2atminterp", VarType::Pco2AtmInterp),
    ("pco2atminterpuatm", VarType::Pco2AtmInterp),
    ("pco2atmwetinterp", VarType::Pco2AtmInterp),
    ("pco2atmwetinterpuatm", VarType::Pco2AtmInterp),
    ("pco2auatm", VarType::Pco2AtmInterp),
    ("airxco2", VarType::Xco2AtmActual),
    ("atmxco2dryppm", VarType::Xco2AtmActual),
    ("xco2a", VarType::Xco2AtmActual),
    ("xco2air", VarType::Xco2AtmActual),
    ("xco2airactual", VarType::Xco2AtmActual),
    ("xco2airactualppm", VarType::Xco2AtmActual),
    ("xco2airactualumolmol", VarType::Xco2AtmActual),
    ("xco2airaveppm", VarType::Xco2AtmActual),
    ("xco2airdry", VarType::Xco2AtmActual),
    ("xco2airdryactual", VarType::Xco2AtmActual),
    ("xco2airdryactualppm", VarType::Xco2AtmActual),
    ("xco2airdryactualumolmol", VarType::Xco2AtmActual),
    ("xco2airdryppm", VarType::Xco2AtmActual),
    ("xco2airdryumolmol", VarType::Xco2AtmActual),
    ("xco2airppm", VarType::Xco2AtmActual),
    ("xco2airumolmol", VarType::Xco2AtmActual),
    ("xco2airwet", VarType::Xco2AtmActual),
    ("xco2amicromolmol", VarType::Xco2AtmActual),
    ("xco2appm", VarType::Xco2AtmActual),
    ("xco2atm", VarType::Xco2AtmActual),
    ("xco2atmactual", VarType::Xco2AtmActual),
    ("xco2atmactualppm", VarType::Xco2AtmActual),
    ("xco2atmactualumolmol", VarType::Xco2AtmActual),
    ("xco2atmdry", VarType::Xco2AtmActual),
    ("xco2atmdryactual", VarType::Xco2AtmActual),
    ("xco2atmdryactualppm", VarType::Xco2AtmActual),
    ("xco2atmdryactualumolmol", VarType::Xco2AtmActual),
    ("xco2atmdryppm", VarType::Xco2AtmActual),
    ("xco2atmdryumolmol", VarType::Xco2AtmActual),
    ("xco2atmppm", VarType::Xco2AtmActual),
    ("xco2atmppmdry", VarType::Xco2AtmActual),
    ("xco2atmppmmeasured", VarType::Xco2AtmActual),
    ("xco2atmppmppm", VarType::Xco2AtmActual),
    ("xco2atmppmv", VarType::Xco2AtmActual),
    ("xco2atmumolmol", VarType::Xco2AtmActual),
    ("xco2aumolmol", VarType::Xco2AtmActual),
    ("xco2dryairmolmol", VarType::Xco2AtmActual),
    ("xco2dryairppm", VarType::Xco2AtmActual),
    ("xco2inairdry", VarType::Xco2AtmActual),
    ("xco2inairdryuatm", VarType::Xco2AtmActual),
    ("xco2indriedairactualumolmol", VarType::Xco2AtmActual),
    ("air", VarType::Xco2AtmInterp),
    ("airxco2cal", VarType::Xco2AtmInterp),
    ("atmxco2dryrunningmeanppm", VarType::Xco2AtmInterp),
    ("co2atm", VarType::Xco2AtmInterp),
    ("co2xatm", VarType::Xco2AtmInterp),
    ("xair", VarType::Xco2AtmInterp),
    ("xco2ainterpolatedppm", VarType::Xco2AtmInterp),
    ("xco2airdryppmv", VarType::Xco2AtmInterp),
    ("xco2airint", VarType::Xco2AtmInterp),
    ("xco2airinterp", VarType::Xco2AtmInterp),
    ("xco2airinterpppm", VarType::Xco2AtmInterp),
    ("xco2airinterpumolmol", VarType::Xco2AtmInterp),
    ("xco2airintppm", VarType::Xco2AtmInterp),
    ("xco2airintumolmol", VarType::Xco2AtmInterp),
    ("xco2airmolmol", VarType::Xco2AtmInterp),
    ("xco2atmassigned", VarType::Xco2AtmInterp),
    ("xco2atmdryinterp", VarType::Xco2AtmInterp),
    ("xco2atmdryinterpumolmol", VarType::Xco2AtmInterp),
    ("xco2atmdryppmv", VarType::Xco2AtmInterp),
    ("xco2atminterp", VarType::Xco2AtmInterp),
    ("xco2atminterpolated", VarType::Xco2AtmInterp),
    ("xco2atminterpolatedppm", VarType::Xco2AtmInterp),
    ("xco2atminterpppm", VarType::Xco2AtmInterp),
    ("xco2atminterpppmdry", VarType::Xco2AtmInterp),
    ("xco2atminterpumolmol", VarType::Xco2AtmInterp),
    ("xco2atmintumolmol1", VarType::Xco2AtmInterp),
    ("xco2atmppminterp", VarType::Xco2AtmInterp),
    ("xco2atmppminterpolatedppm", VarType::Xco2AtmInterp),
    ("xco2indryairppmv", VarType::Xco2AtmInterp),
    ("intaketemperature", VarType::SeaSurfaceTemperature),
    ("intaketemperaturecelsius", VarType::SeaSurfaceTemperature),
    ("istempdegc", VarType::SeaSurfaceTemperature),
    ("sami521mtemp", VarType::SeaSurfaceTemperature),
    ("sbo37temp", VarType::SeaSurfaceTemperature),
    ("seasurfacetemperature", VarType::SeaSurfaceTemperature),
    ("seasurfacetemperaturec", VarType::SeaSurfaceTemperature),
    ("seasurfacetemperaturedegc", VarType::SeaSurfaceTemperature),
    ("seasurfacetemperaturedegrc", VarType::SeaSurfaceTemperature),
    ("seasurfacetemperatureinsituc", VarType::SeaSurfaceTemperature),
    ("seatempdegc", VarType::SeaSurfaceTemperature),
    ("shiptempc", VarType::SeaSurfaceTemperature),
    ("sst", VarType::SeaSurfaceTemperature),
    ("sst38", VarType::SeaSurfaceTemperature),
    ("sstc", VarType::SeaSurfaceTemperature),
    ("sstcal", VarType::SeaSurfaceTemperature),
    ("sstdegc", VarType::SeaSurfaceTemperature),
    ("sstdegreesc", VarType::SeaSurfaceTemperature),
    ("sstk", VarType::SeaSurfaceTemperature),
    ("sstoc", VarType::SeaSurfaceTemperature),
    ("sstsw", VarType::SeaSurfaceTemperature),
    ("ssttsg", VarType::SeaSurfaceTemperature),
    ("ssttsgc", VarType::SeaSurfaceTemperature),
    ("swtemperaturec", VarType::SeaSurfaceTemperature),
    ("tdegc", VarType::SeaSurfaceTemperature),
    ("temp", VarType::SeaSurfaceTemperature),
    ("tempc", VarType::SeaSurfaceTemperature),
    ("tempdegc", VarType::SeaSurfaceTemperature),
    ("temperature", VarType::SeaSurfaceTemperature),
    ("temperatureatseawaterintakeoc", VarType::SeaSurfaceTemperature),
    ("temperaturec", VarType::SeaSurfaceTemperature),
    ("temperaturefrommicrocatat1mtemperature", VarType::SeaSurfaceTemperature),
    ("tempheadoc", VarType::SeaSurfaceTemperature),
    ("tempintake", VarType::SeaSurfaceTemperature),
    ("tempoc", VarType::SeaSurfaceTemperature),
    ("tempseawaterdegreesc", VarType::SeaSurfaceTemperature),
    ("tempsst", VarType::SeaSurfaceTemperature),
    ("temptailoc", VarType::SeaSurfaceTemperature),
    ("tinsitu", VarType::SeaSurfaceTemperature),
    ("tinsituc", VarType::SeaSurfaceTemperature),
    ("tinsitudegc", VarType::SeaSurfaceTemperature),
    ("tintake", VarType::SeaSurfaceTemperature),
    ("tmpfb", VarType::SeaSurfaceTemperature),
    ("tmpfb11163", VarType::SeaSurfaceTemperature),
    ("tmpwatdegc", VarType::SeaSurfaceTemperature),
    ("tsea", VarType::SeaSurfaceTemperature),
    ("tstc", VarType::SeaSurfaceTemperature),
    ("watertemp", VarType::SeaSurfaceTemperature),
    ("watertempdegc", VarType::SeaSurfaceTemperature),
    ("watertempdegreesc", VarType::SeaSurfaceTemperature),
    ("watertemperature", VarType::SeaSurfaceTemperature),
    ("watertemperaturedegc", VarType::SeaSurfaceTemperature),
    ("waterttempc", VarType::SeaSurfaceTemperature),
    ("waterttemperaturec", VarType::SeaSurfaceTemperature),
    ("eqt", VarType::EquilibratorTemperature),
    ("eqtemp", VarType::EquilibratorTemperature),
    ("eqtempc", VarType::EquilibratorTemperature),
    ("eqtempcal", VarType::EquilibratorTemperature),
    ("eqtempdegc", VarType::EquilibratorTemperature),
    ("eqtmp", VarType::EquilibratorTemperature),
    ("eqtmpdegc", VarType::EquilibratorTemperature),
    ("equilibratortemperature", VarType::EquilibratorTemperature),
    ("equilibratortemperaturec", VarType::EquilibratorTemperature),
    ("equilibratortemperaturedegc", VarType::EquilibratorTemperature),
    ("equilibratortemperaturedegrc", VarType::EquilibratorTemperature),
    ("equilitc", VarType::EquilibratorTemperature),
    ("equilt", VarType::EquilibratorTemperature),
    ("equiltemp", VarType::EquilibratorTemperature),
    ("equiltempdegc", VarType::EquilibratorTemperature),
    ("equitempdegc", VarType::EquilibratorTemperature),
    ("equtemp", VarType::EquilibratorTemperature),
    ("equtempdegc", VarType::EquilibratorTemperature),
    ("equtempsw", VarType::EquilibratorTemperature),
    ("licortemp", VarType::EquilibratorTemperature),
    ("pco2tmp", VarType::EquilibratorTemperature),
    ("tempeq", VarType::EquilibratorTemperature),
    ("tempeqc", VarType::EquilibratorTemperature),
    ("tempeqdegc", VarType::EquilibratorTemperature),
    ("tempeqdegreesc", VarType::EquilibratorTemperature),
    ("tempequ", VarType::EquilibratorTemperature),
    ("tempequc", VarType::EquilibratorTemperature),
    ("tempequdegc", VarType::EquilibratorTemperature),
    ("tempequi", VarType::EquilibratorTemperature),
    ("tempequic", VarType::EquilibratorTemperature),
    ("tempequidegc", VarType::EquilibratorTemperature),
    ("tempequil", VarType::EquilibratorTemperature),
    ("tempequoc", VarType::EquilibratorTemperature),
    ("temperatureatpco2equilibratoroc", VarType::EquilibratorTemperature),
    ("temperatureequi", VarType::EquilibratorTemperature),
    ("temperatureequic", VarType::EquilibratorTemperature),
    ("temperatureequidegc", VarType::EquilibratorTemperature),
    ("temperatureofequilibration", VarType::EquilibratorTemperature),
    ("temperatureofequilibrationdegc", VarType::EquilibratorTemperature),
    ("teq", VarType::EquilibratorTemperature),
    ("teqc", VarType::EquilibratorTemperature),
    ("teqdegc", VarType::EquilibratorTemperature),
    ("teqic", VarType::EquilibratorTemperature),
    ("teqoc", VarType::EquilibratorTemperature),
    ("tequ", VarType::EquilibratorTemperature),
    ("tequc", VarType::EquilibratorTemperature),
    ("tequdegc", VarType::EquilibratorTemperature),
    ("tequdegreesc", VarType::EquilibratorTemperature),
    ("tequi", VarType::EquilibratorTemperature),
    ("tequic", VarType::EquilibratorTemperature),
    ("tequidegc", VarType::EquilibratorTemperature),
    ("tequil", VarType::EquilibratorTemperature),
    ("tequilc", VarType::EquilibratorTemperature),
    ("tequildegc", VarType::EquilibratorTemperature),
    ("tmpeq", VarType::EquilibratorTemperature),
    ("tmpeqdegc", VarType::EquilibratorTemperature),
    ("tsgtemp", VarType::EquilibratorTemperature),
    ("ttechc", VarType::EquilibratorTemperature),
    ("airp", VarType::SeaLevelPressure),
    ("airpress", VarType::SeaLevelPressure),
    ("airpresshpa", VarType::SeaLevelPressure),
    ("airpressure", VarType::SeaLevelPressure),
    ("airpressurehpa", VarType::SeaLevelPressure),
    ("airpressurekpa", VarType::SeaLevelPressure),
    ("airpressurembar", VarType::SeaLevelPressure),
    ("airpressuremmhg", VarType::SeaLevelPressure),
    ("atmosphericpressure", VarType::SeaLevelPressure),
    ("atmosphericpressurehpa", VarType::SeaLevelPressure),
    ("atmosphericpressurekpa", VarType::SeaLevelPressure),
    ("atmosphericpressuremb", VarType::SeaLevelPressure),
    ("atmosrmpresscal", VarType::SeaLevelPressure),
    ("atmosrmpresscalhpa", VarType::SeaLevelPressure),
    ("atmpre", VarType::SeaLevelPressure),
    ("atmpredbar", VarType::SeaLevelPressure),
    ("atmprehpa", VarType::SeaLevelPressure),
    ("atmprembar", VarType::SeaLevelPressure),
    ("atmprepatm", VarType::SeaLevelPressure),
    ("atmpres", VarType::SeaLevelPressure),
    ("atmpresmbar", VarType::SeaLevelPressure),
    ("atmpress", VarType::SeaLevelPressure),
    ("atmpressmbar", VarType::SeaLevelPressure),
    ("atmpressurehpa", VarType::SeaLevelPressure),
    ("atmpressurembar", VarType::SeaLevelPressure),
    ("atmprs", VarType::SeaLevelPressure),
    ("atmprshpa", VarType::SeaLevelPressure),
    ("barometricpressurehpa", VarType::SeaLevelPressure),
    ("barometricpressurembar", VarType::SeaLevelPressure),
    ("bpratm", VarType::SeaLevelPressure),
    ("pair", VarType::SeaLevelPressure),
    ("pairhpa", VarType::SeaLevelPressure),
    ("pairkpa", VarType::SeaLevelPressure),
    ("pairmbar", VarType::SeaLevelPressure),
    ("pairmmhg", VarType::SeaLevelPressure),
    ("pam", VarType::SeaLevelPressure),
    ("patm", VarType::SeaLevelPressure),
    ("patmhpa", VarType::SeaLevelPressure),
    ("patmkpa", VarType::SeaLevelPressure),
    ("patmmb", VarType::SeaLevelPressure),
    ("patmmbar", VarType::SeaLevelPressure),
    ("patmmmhg", VarType::SeaLevelPressure),
    ("pppp", VarType::SeaLevelPressure),
    ("pppphpa", VarType::SeaLevelPressure),
    ("ppppkpa", VarType::SeaLevelPressure),
    ("ppppmbar", VarType::SeaLevelPressure),
    ("ppppmmhg", VarType::SeaLevelPressure),
    ("pres", VarType::SeaLevelPressure),
    ("presair", VarType::SeaLevelPressure),
    ("presairhpa", VarType::SeaLevelPressure),
    ("presairkpa", VarType::SeaLevelPressure),
    ("presairmbar", VarType::SeaLevelPressure),
    ("presairmmhg", VarType::SeaLevelPressure),
    ("presatm", VarType::SeaLevelPressure),
    ("presatmhpa", VarType::SeaLevelPressure),
    ("presatmkpa", VarType::SeaLevelPressure),
    ("presatmmbar", VarType::SeaLevelPressure),
    ("presatmmmhg", VarType::SeaLevelPressure),
    ("presatmssp", VarType::SeaLevelPressure),
    ("presatmssphpa", VarType::SeaLevelPressure),
    ("preskpa", VarType::SeaLevelPressure),
    ("presmb", VarType::SeaLevelPressure),
    ("pressatm", VarType::SeaLevelPressure),
    ("pressatmhpa", VarType::SeaLevelPressure),
    ("pressealevelhpa", VarType::SeaLevelPressure),
    ("pressmbar", VarType::SeaLevelPressure),
    ("presssealevelhpa", VarType::SeaLevelPressure),
    ("pressure", VarType::SeaLevelPressure),
    ("pressureatm", VarType::SeaLevelPressure),
    ("pressureatmhpa", VarType::SeaLevelPressure),
    ("pressureatmkpa", VarType::SeaLevelPressure),
    ("pressureatmmbar", VarType::SeaLevelPressure),
    ("pressureatmmhg", VarType::SeaLevelPressure),
    ("pressurembar", VarType::SeaLevelPressure),
    ("prsatm", VarType::SeaLevelPressure),
    ("prsatmhpa", VarType::SeaLevelPressure),
    ("sealevelpressure", VarType::SeaLevelPressure),
    ("sealevelpressurehpa", VarType::SeaLevelPressure),
    ("sealevelpressurekpa", VarType::SeaLevelPressure),
    ("sealevelpressurembar", VarType::SeaLevelPressure),
    ("sealevelpressuremmhg", VarType::SeaLevelPressure),
    ("shipatmpresshpa", VarType::SeaLevelPressure),
    ("slp", VarType::SeaLevelPressure),
    ("slphpa", VarType::SeaLevelPressure),
    ("slpmbar", VarType::SeaLevelPressure),
    ("slpmmhg", VarType::SeaLevelPressure),
    ("atmosphericpressureatpco2systemmb", VarType::EquilibratorPressure),
    ("baropress", VarType::EquilibratorPressure),
    ("eqp", VarType::EquilibratorPressure),
    ("eqphpa", VarType::EquilibratorPressure),
    ("eqpre", VarType::EquilibratorPressure),
    ("eqprehpa", VarType::EquilibratorPressure),
    ("eqprembar", VarType::EquilibratorPressure),
    ("eqpress", VarType::EquilibratorPressure),
    ("eqpresshpa", VarType::EquilibratorPressure),
    ("equilibratorpressure", VarType::EquilibratorPressure),
    ("equilibratorpressurehpa", VarType::EquilibratorPressure),
    ("equilibratorpressurekpa", VarType::EquilibratorPressure),
    ("equilibratorpressurembar", VarType::EquilibratorPressure),
    ("equilibratorpressuremmhg", VarType::EquilibratorPressure),
    ("equilpres", VarType::EquilibratorPressure),
    ("equilpress", VarType::EquilibratorPressure),
    ("equilpresshpa", VarType::EquilibratorPressure),
    ("equilpressurehpa", VarType::EquilibratorPressure),
    ("equipressmbar", VarType::EquilibratorPressure),
    ("equpresmbar", VarType::EquilibratorPressure),
    ("equpress", VarType::EquilibratorPressure),
    ("equpresssw", VarType::EquilibratorPressure),
    ("equpressure", VarType::EquilibratorPressure),
    ("licoratmpressure", VarType::EquilibratorPressure),
    ("licoratmpressurehpa", VarType::EquilibratorPressure),
    ("peq", VarType::EquilibratorPressure),
    ("peqhpa", VarType::EquilibratorPressure),
    ("peqkpa", VarType::EquilibratorPressure),
    ("peqmbar", VarType::EquilibratorPressure),
    ("peqmmhg", VarType::EquilibratorPressure),
    ("pequ", VarType::EquilibratorPressure),
    ("pequhpa", VarType::EquilibratorPressure),
    ("pequi", VarType::EquilibratorPressure),
    ("pequihpa", VarType::EquilibratorPressure),
    ("pequikpa", VarType::EquilibratorPressure),
    ("pequilib", VarType::EquilibratorPressure),
    ("pequimbar", VarType::EquilibratorPressure),
    ("pequimmhg", VarType::EquilibratorPressure),
    ("pequkpa", VarType::EquilibratorPressure),
    ("pequmbar", VarType::EquilibratorPressure),
    ("peqummhg", VarType::EquilibratorPressure),
    ("phpa", VarType::EquilibratorPressure),
    ("preseq", VarType::EquilibratorPressure),
    ("preseqhpa", VarType::EquilibratorPressure),
    ("preseqkpa", VarType::EquilibratorPressure),
    ("preseqmbar", VarType::EquilibratorPressure),
    ("preseqmmhg", VarType::EquilibratorPressure),
    ("presequ", VarType::EquilibratorPressure),
    ("presequhpa", VarType::EquilibratorPressure),
    ("presequi", VarType::EquilibratorPressure),
    ("presequihpa", VarType::EquilibratorPressure),
    ("presequikpa", VarType::EquilibratorPressure),
    ("presequilhpa", VarType::EquilibratorPressure),
    ("presequimbar", VarType::EquilibratorPressure),
    ("presequimmhg", VarType::EquilibratorPressure),
    ("presequkpa", VarType::EquilibratorPressure),
    ("presequmbar", VarType::EquilibratorPressure),
    ("preseqummhg", VarType::EquilibratorPressure),
    ("preslabhpa", VarType::EquilibratorPressure),
    ("preslicorhpa", VarType::EquilibratorPressure),
    ("presseq", VarType::EquilibratorPressure),
    ("pressequhpa", VarType::EquilibratorPressure),
    ("pressequilhpa", VarType::EquilibratorPressure),
    ("pressureequi", VarType::EquilibratorPressure),
    ("pressureequil", VarType::EquilibratorPressure),
    ("pressureofequilibrationhpa", VarType::EquilibratorPressure),
    ("pressureofequilibrationthepressureintheequilibrationvesselhpa", VarType::EquilibratorPressure),
    ("prseq", VarType::EquilibratorPressure),
    ("prseqhpa", VarType::EquilibratorPressure),
    ("issal", VarType::Salinity),
    ("psusw", VarType::Salinity),
    ("sal", VarType::Salinity),
    ("salfb", VarType::Salinity),
    ("salfb35395", VarType::Salinity),
    ("salinity", VarType::Salinity),
    ("salinityatseawaterintake", VarType::Salinity),
    ("salinityfrommicrocatat1msalinity", VarType::Salinity),
    ("salinityperm", VarType::Salinity),
    ("salinitypermil", VarType::Salinity),
    ("salinityppt", VarType::Salinity),
    ("salinitypss", VarType::Salinity),
    ("salinitypsu", VarType::Salinity),
    ("salinityqualityflagsalquality", VarType::Salinity),
    ("salinitysource", VarType::Salinity),
    ("salinitywoceflag", VarType::Salinity),
    ("salinsitupsu", VarType::Salinity),
    ("salperm", VarType::Salinity),
    ("salpermil", VarType::Salinity),
    ("salpsu", VarType::Salinity),
    ("saltsg", VarType::Salinity),
    ("saltsgpermil", VarType::Salinity),
    ("salttsg", VarType::Salinity),
    ("salverified", VarType::Salinity),
    ("sdsal", VarType::Salinity),
    ("seasurfacesalinityinsitu", VarType::Salinity),
    ("shipsalpsu", VarType::Salinity),
    ("sinsitu", VarType::Salinity),
    ("ssea", VarType::Salinity),
    ("sss", VarType::Salinity),
    ("sssnu", VarType::Salinity),
    ("sssperm", VarType::Salinity),
    ("ssspermil", VarType::Salinity),
    ("ssspss", VarType::Salinity),
    ("ssspss78", VarType::Salinity),
    ("ssspsu", VarType::Salinity),
    ("ssstsg", VarType::Salinity),
    ("tsgsal", VarType::Salinity),
    ("tsgsalcorr", VarType::Salinity),
    ("tsgsalt", VarType::Salinity),
    ("tssal", VarType::Salinity),
    ("co2fwoceflag", VarType::WoceCo2Water),
    ("co2swqf", VarType::WoceCo2Water),
    ("fco2flag", VarType::WoceCo2Water),
    ("fco2qcflag", VarType::WoceCo2Water),
    ("fco2swqf", VarType::WoceCo2Water),
    ("flag", VarType::WoceCo2Water),
    ("pco2swqf", VarType::WoceCo2Water),
    ("qc", VarType::WoceCo2Water),
    ("qcco2aq", VarType::WoceCo2Water),
    ("qcco2sw", VarType::WoceCo2Water),
    ("qcco2water", VarType::WoceCo2Water),
    ("qcflag", VarType::WoceCo2Water),
    ("qcflagw", VarType::WoceCo2Water),
    ("qcwater", VarType::WoceCo2Water),
    ("qfco2sw", VarType::WoceCo2Water),
    ("qffco2sw", VarType::WoceCo2Water),
    ("qfpco2sw", VarType::WoceCo2Water),
    ("qfxco2", VarType::WoceCo2Water),
    ("qfxco2sw", VarType::WoceCo2Water),
    ("woceco2", VarType::WoceCo2Water),
    ("woceco2aq", VarType::WoceCo2Water),
    ("woceco2sw", VarType::WoceCo2Water),
    ("woceco2water", VarType::WoceCo2Water),
    ("woceflag", VarType::WoceCo2Water),
    ("woceflags", VarType::WoceCo2Water),
    ("woceqcflag", VarType::WoceCo2Water),
    ("wocewater", VarType::WoceCo2Water),
    ("xco2dryswwoceflag", VarType::WoceCo2Water),
    ("xco2flag", VarType::WoceCo2Water),
    ("xco2swqf", VarType::WoceCo2Water),
    ("xco2swqfint", VarType::WoceCo2Water),
    ("woceco2atm", VarType::WoceCo2Atm),
    ("qcair", VarType::WoceCo2Atm),
    ("qcco2air", VarType::WoceCo2Atm),
    ("qcco2atm", VarType::WoceCo2Atm),
    ("qcflagair", VarType::WoceCo2Atm),
];
