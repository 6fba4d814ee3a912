//! Boot-time seeding of reference data.
//!
//! Populates the store with the built-in country/region population tables
//! and the 2025 German school-holiday calendar (schulferien.org). Seeding
//! is idempotent: when countries already exist the whole step is skipped.

use chrono::NaiveDate;
use tracing::info;

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{Country, Region, SchoolHoliday};

/// `(code, name, population)`
const COUNTRIES: &[(&str, &str, i64)] = &[
    ("DE", "Germany", 83_240_000),
    ("AT", "Austria", 9_006_000),
    ("CH", "Switzerland", 8_740_000),
    ("FR", "France", 67_410_000),
    ("ES", "Spain", 47_350_000),
    ("NL", "Netherlands", 17_530_000),
    ("IT", "Italy", 59_070_000),
];

/// `(code, name, country_code, population)`
const REGIONS: &[(&str, &str, &str, i64)] = &[
    // Germany
    ("DE-BW", "Baden-Württemberg", "DE", 11_100_000),
    ("DE-BY", "Bayern", "DE", 13_100_000),
    ("DE-BE", "Berlin", "DE", 3_650_000),
    ("DE-BB", "Brandenburg", "DE", 2_520_000),
    ("DE-HB", "Bremen", "DE", 680_000),
    ("DE-HH", "Hamburg", "DE", 1_850_000),
    ("DE-HE", "Hessen", "DE", 6_290_000),
    ("DE-MV", "Mecklenburg-Vorpommern", "DE", 1_610_000),
    ("DE-NI", "Niedersachsen", "DE", 8_000_000),
    ("DE-NW", "Nordrhein-Westfalen", "DE", 17_930_000),
    ("DE-RP", "Rheinland-Pfalz", "DE", 4_090_000),
    ("DE-SL", "Saarland", "DE", 990_000),
    ("DE-SN", "Sachsen", "DE", 4_080_000),
    ("DE-ST", "Sachsen-Anhalt", "DE", 2_190_000),
    ("DE-SH", "Schleswig-Holstein", "DE", 2_910_000),
    ("DE-TH", "Thüringen", "DE", 2_120_000),
    // Austria
    ("AT-1", "Burgenland", "AT", 294_000),
    ("AT-2", "Kärnten", "AT", 561_000),
    ("AT-3", "Niederösterreich", "AT", 1_690_000),
    ("AT-4", "Oberösterreich", "AT", 1_490_000),
    ("AT-5", "Salzburg", "AT", 560_000),
    ("AT-6", "Steiermark", "AT", 1_250_000),
    ("AT-7", "Tirol", "AT", 760_000),
    ("AT-8", "Vorarlberg", "AT", 400_000),
    ("AT-9", "Wien", "AT", 1_900_000),
    // Switzerland
    ("CH-AG", "Aargau", "CH", 690_000),
    ("CH-AI", "Appenzell Innerrhoden", "CH", 16_000),
    ("CH-AR", "Appenzell Ausserrhoden", "CH", 55_000),
    ("CH-BE", "Bern", "CH", 1_040_000),
    ("CH-BL", "Basel-Landschaft", "CH", 290_000),
    ("CH-BS", "Basel-Stadt", "CH", 195_000),
    ("CH-FR", "Fribourg", "CH", 320_000),
    ("CH-GE", "Genève", "CH", 500_000),
    ("CH-GL", "Glarus", "CH", 41_000),
    ("CH-GR", "Graubünden", "CH", 200_000),
    ("CH-JU", "Jura", "CH", 73_000),
    ("CH-LU", "Luzern", "CH", 410_000),
    ("CH-NE", "Neuchâtel", "CH", 177_000),
    ("CH-NW", "Nidwalden", "CH", 43_000),
    ("CH-OW", "Obwalden", "CH", 38_000),
    ("CH-SG", "St. Gallen", "CH", 510_000),
    ("CH-SH", "Schaffhausen", "CH", 83_000),
    ("CH-SO", "Solothurn", "CH", 276_000),
    ("CH-SZ", "Schwyz", "CH", 160_000),
    ("CH-TG", "Thurgau", "CH", 280_000),
    ("CH-TI", "Ticino", "CH", 350_000),
    ("CH-UR", "Uri", "CH", 37_000),
    ("CH-VD", "Vaud", "CH", 810_000),
    ("CH-VS", "Valais", "CH", 350_000),
    ("CH-ZG", "Zug", "CH", 130_000),
    ("CH-ZH", "Zürich", "CH", 1_540_000),
    // France
    ("FR-ARA", "Auvergne-Rhône-Alpes", "FR", 8_040_000),
    ("FR-BFC", "Bourgogne-Franche-Comté", "FR", 2_800_000),
    ("FR-BRE", "Bretagne", "FR", 3_340_000),
    ("FR-CVL", "Centre-Val de Loire", "FR", 2_570_000),
    ("FR-COR", "Corse", "FR", 340_000),
    ("FR-GES", "Grand Est", "FR", 5_560_000),
    ("FR-HDF", "Hauts-de-France", "FR", 6_000_000),
    ("FR-IDF", "Île-de-France", "FR", 12_270_000),
    ("FR-NOR", "Normandie", "FR", 3_330_000),
    ("FR-NAQ", "Nouvelle-Aquitaine", "FR", 6_000_000),
    ("FR-OCC", "Occitanie", "FR", 5_920_000),
    ("FR-PDL", "Pays de la Loire", "FR", 3_800_000),
    ("FR-PAC", "Provence-Alpes-Côte d'Azur", "FR", 5_050_000),
    // Spain
    ("ES-AN", "Andalucía", "ES", 8_470_000),
    ("ES-AR", "Aragón", "ES", 1_320_000),
    ("ES-AS", "Asturias", "ES", 1_020_000),
    ("ES-IB", "Islas Baleares", "ES", 1_170_000),
    ("ES-CN", "Islas Canarias", "ES", 2_170_000),
    ("ES-CB", "Cantabria", "ES", 580_000),
    ("ES-CL", "Castilla y León", "ES", 2_400_000),
    ("ES-CM", "Castilla-La Mancha", "ES", 2_040_000),
    ("ES-CT", "Cataluña", "ES", 7_670_000),
    ("ES-EX", "Extremadura", "ES", 1_070_000),
    ("ES-GA", "Galicia", "ES", 2_700_000),
    ("ES-MD", "Madrid", "ES", 6_750_000),
    ("ES-MC", "Murcia", "ES", 1_510_000),
    ("ES-NC", "Navarra", "ES", 660_000),
    ("ES-PV", "País Vasco", "ES", 2_210_000),
    ("ES-RI", "La Rioja", "ES", 320_000),
    ("ES-VC", "Comunidad Valenciana", "ES", 5_060_000),
    // Netherlands
    ("NL-DR", "Drenthe", "NL", 493_000),
    ("NL-FL", "Flevoland", "NL", 430_000),
    ("NL-FR", "Friesland", "NL", 650_000),
    ("NL-GE", "Gelderland", "NL", 2_090_000),
    ("NL-GR", "Groningen", "NL", 585_000),
    ("NL-LI", "Limburg", "NL", 1_120_000),
    ("NL-NB", "Noord-Brabant", "NL", 2_570_000),
    ("NL-NH", "Noord-Holland", "NL", 2_880_000),
    ("NL-OV", "Overijssel", "NL", 1_160_000),
    ("NL-UT", "Utrecht", "NL", 1_360_000),
    ("NL-ZE", "Zeeland", "NL", 385_000),
    ("NL-ZH", "Zuid-Holland", "NL", 3_710_000),
    // Italy
    ("IT-65", "Abruzzo", "IT", 1_300_000),
    ("IT-77", "Basilicata", "IT", 560_000),
    ("IT-78", "Calabria", "IT", 1_920_000),
    ("IT-72", "Campania", "IT", 5_790_000),
    ("IT-45", "Emilia-Romagna", "IT", 4_460_000),
    ("IT-36", "Friuli-Venezia Giulia", "IT", 1_210_000),
    ("IT-62", "Lazio", "IT", 5_880_000),
    ("IT-42", "Liguria", "IT", 1_540_000),
    ("IT-25", "Lombardia", "IT", 10_060_000),
    ("IT-57", "Marche", "IT", 1_520_000),
    ("IT-67", "Molise", "IT", 300_000),
    ("IT-21", "Piemonte", "IT", 4_340_000),
    ("IT-75", "Puglia", "IT", 4_020_000),
    ("IT-88", "Sardegna", "IT", 1_630_000),
    ("IT-82", "Sicilia", "IT", 4_970_000),
    ("IT-52", "Toscana", "IT", 3_730_000),
    ("IT-32", "Trentino-Alto Adige", "IT", 1_080_000),
    ("IT-55", "Umbria", "IT", 880_000),
    ("IT-23", "Valle d'Aosta", "IT", 125_000),
    ("IT-34", "Veneto", "IT", 4_910_000),
];

const SCHOOL_HOLIDAY_YEAR: i32 = 2025;

/// German school holidays 2025: `(name, region_code, start, end)`
const SCHOOL_HOLIDAYS_2025: &[(&str, &str, &str, &str)] = &[
    // Baden-Württemberg
    ("Osterferien", "DE-BW", "2025-04-14", "2025-04-26"),
    ("Pfingstferien", "DE-BW", "2025-06-10", "2025-06-20"),
    ("Sommerferien", "DE-BW", "2025-07-31", "2025-09-13"),
    ("Herbstferien", "DE-BW", "2025-10-27", "2025-10-31"),
    ("Weihnachtsferien", "DE-BW", "2025-12-22", "2026-01-05"),
    // Bayern
    ("Winterferien", "DE-BY", "2025-03-03", "2025-03-07"),
    ("Osterferien", "DE-BY", "2025-04-14", "2025-04-25"),
    ("Pfingstferien", "DE-BY", "2025-06-10", "2025-06-20"),
    ("Sommerferien", "DE-BY", "2025-08-01", "2025-09-15"),
    ("Herbstferien", "DE-BY", "2025-11-03", "2025-11-07"),
    ("Weihnachtsferien", "DE-BY", "2025-12-22", "2026-01-05"),
    // Berlin
    ("Winterferien", "DE-BE", "2025-02-03", "2025-02-08"),
    ("Osterferien", "DE-BE", "2025-04-14", "2025-04-25"),
    ("Pfingstferien", "DE-BE", "2025-06-10", "2025-06-10"),
    ("Sommerferien", "DE-BE", "2025-07-24", "2025-09-06"),
    ("Herbstferien", "DE-BE", "2025-10-20", "2025-11-01"),
    ("Weihnachtsferien", "DE-BE", "2025-12-22", "2026-01-02"),
    // Brandenburg
    ("Winterferien", "DE-BB", "2025-02-03", "2025-02-08"),
    ("Osterferien", "DE-BB", "2025-04-14", "2025-04-25"),
    ("Pfingstferien", "DE-BB", "2025-06-10", "2025-06-10"),
    ("Sommerferien", "DE-BB", "2025-07-24", "2025-09-06"),
    ("Herbstferien", "DE-BB", "2025-10-20", "2025-11-01"),
    ("Weihnachtsferien", "DE-BB", "2025-12-22", "2026-01-02"),
    // Bremen
    ("Winterferien", "DE-HB", "2025-02-03", "2025-02-04"),
    ("Osterferien", "DE-HB", "2025-04-07", "2025-04-19"),
    ("Sommerferien", "DE-HB", "2025-07-03", "2025-08-13"),
    ("Herbstferien", "DE-HB", "2025-10-13", "2025-10-25"),
    ("Weihnachtsferien", "DE-HB", "2025-12-22", "2026-01-05"),
    // Hamburg
    ("Winterferien", "DE-HH", "2025-01-31", "2025-01-31"),
    ("Osterferien", "DE-HH", "2025-03-10", "2025-03-21"),
    ("Pfingstferien", "DE-HH", "2025-05-02", "2025-05-30"),
    ("Sommerferien", "DE-HH", "2025-07-24", "2025-09-03"),
    ("Herbstferien", "DE-HH", "2025-10-20", "2025-10-31"),
    ("Weihnachtsferien", "DE-HH", "2025-12-17", "2026-01-02"),
    // Hessen
    ("Osterferien", "DE-HE", "2025-04-07", "2025-04-21"),
    ("Sommerferien", "DE-HE", "2025-07-07", "2025-08-15"),
    ("Herbstferien", "DE-HE", "2025-10-06", "2025-10-18"),
    ("Weihnachtsferien", "DE-HE", "2025-12-22", "2026-01-10"),
    // Mecklenburg-Vorpommern
    ("Winterferien", "DE-MV", "2025-02-03", "2025-02-14"),
    ("Osterferien", "DE-MV", "2025-04-14", "2025-04-23"),
    ("Pfingstferien", "DE-MV", "2025-06-06", "2025-06-10"),
    ("Sommerferien", "DE-MV", "2025-07-28", "2025-09-06"),
    ("Herbstferien", "DE-MV", "2025-10-20", "2025-10-25"),
    ("Weihnachtsferien", "DE-MV", "2025-12-20", "2026-01-03"),
    // Niedersachsen
    ("Winterferien", "DE-NI", "2025-02-03", "2025-02-04"),
    ("Osterferien", "DE-NI", "2025-04-07", "2025-04-19"),
    ("Sommerferien", "DE-NI", "2025-07-03", "2025-08-13"),
    ("Herbstferien", "DE-NI", "2025-10-13", "2025-10-25"),
    ("Weihnachtsferien", "DE-NI", "2025-12-22", "2026-01-05"),
    // Nordrhein-Westfalen
    ("Osterferien", "DE-NW", "2025-04-14", "2025-04-26"),
    ("Pfingstferien", "DE-NW", "2025-06-10", "2025-06-10"),
    ("Sommerferien", "DE-NW", "2025-07-14", "2025-08-26"),
    ("Herbstferien", "DE-NW", "2025-10-13", "2025-10-25"),
    ("Weihnachtsferien", "DE-NW", "2025-12-22", "2026-01-06"),
    // Rheinland-Pfalz
    ("Osterferien", "DE-RP", "2025-04-14", "2025-04-25"),
    ("Sommerferien", "DE-RP", "2025-07-07", "2025-08-15"),
    ("Herbstferien", "DE-RP", "2025-10-13", "2025-10-24"),
    ("Weihnachtsferien", "DE-RP", "2025-12-22", "2026-01-07"),
    // Saarland
    ("Winterferien", "DE-SL", "2025-02-24", "2025-03-04"),
    ("Osterferien", "DE-SL", "2025-04-14", "2025-04-25"),
    ("Sommerferien", "DE-SL", "2025-07-07", "2025-08-14"),
    ("Herbstferien", "DE-SL", "2025-10-13", "2025-10-24"),
    ("Weihnachtsferien", "DE-SL", "2025-12-22", "2026-01-02"),
    // Sachsen
    ("Winterferien", "DE-SN", "2025-02-17", "2025-03-01"),
    ("Osterferien", "DE-SN", "2025-04-18", "2025-04-25"),
    ("Sommerferien", "DE-SN", "2025-06-28", "2025-08-08"),
    ("Herbstferien", "DE-SN", "2025-10-06", "2025-10-18"),
    ("Weihnachtsferien", "DE-SN", "2025-12-22", "2026-01-02"),
    // Sachsen-Anhalt
    ("Winterferien", "DE-ST", "2025-01-27", "2025-01-31"),
    ("Osterferien", "DE-ST", "2025-04-07", "2025-04-19"),
    ("Pfingstferien", "DE-ST", "2025-05-30", "2025-05-30"),
    ("Sommerferien", "DE-ST", "2025-06-28", "2025-08-08"),
    ("Herbstferien", "DE-ST", "2025-10-13", "2025-10-25"),
    ("Weihnachtsferien", "DE-ST", "2025-12-22", "2026-01-05"),
    // Schleswig-Holstein
    ("Osterferien", "DE-SH", "2025-04-11", "2025-04-25"),
    ("Pfingstferien", "DE-SH", "2025-05-30", "2025-05-30"),
    ("Sommerferien", "DE-SH", "2025-07-28", "2025-09-06"),
    ("Herbstferien", "DE-SH", "2025-10-20", "2025-10-30"),
    ("Weihnachtsferien", "DE-SH", "2025-12-19", "2026-01-06"),
    // Thüringen
    ("Winterferien", "DE-TH", "2025-02-03", "2025-02-08"),
    ("Osterferien", "DE-TH", "2025-04-07", "2025-04-19"),
    ("Pfingstferien", "DE-TH", "2025-05-30", "2025-05-30"),
    ("Sommerferien", "DE-TH", "2025-06-28", "2025-08-08"),
    ("Herbstferien", "DE-TH", "2025-10-06", "2025-10-18"),
    ("Weihnachtsferien", "DE-TH", "2025-12-22", "2026-01-03"),
];

fn parse_date(s: &str) -> RepositoryResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::internal(format!("Invalid seed date {}: {}", s, e)))
}

/// Load the built-in reference data into an empty store.
///
/// Skips entirely when countries already exist, so restarting against a
/// populated store is a no-op.
pub async fn seed_reference_data(repository: &dyn FullRepository) -> RepositoryResult<()> {
    if repository.count_countries().await? > 0 {
        info!("Data already loaded, skipping initialization");
        return Ok(());
    }

    info!("Loading initial data...");

    for (code, name, population) in COUNTRIES {
        repository
            .save_country(Country::new(*code, *name, Some(*population)))
            .await?;
    }

    for (code, name, country_code, population) in REGIONS {
        repository
            .save_region(Region::new(*code, *name, *country_code, Some(*population)))
            .await?;
    }

    for (name, region_code, start, end) in SCHOOL_HOLIDAYS_2025 {
        let mut school_holiday = SchoolHoliday::new(
            *name,
            *region_code,
            parse_date(start)?,
            parse_date(end)?,
        );
        school_holiday.year = SCHOOL_HOLIDAY_YEAR;
        repository.save_school_holiday(school_holiday).await?;
    }

    info!(
        "Data loading complete: {} countries, {} regions, {} school holidays",
        COUNTRIES.len(),
        REGIONS.len(),
        SCHOOL_HOLIDAYS_2025.len()
    );

    Ok(())
}
