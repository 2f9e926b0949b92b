//! # Country Reference Table
//!
//! The complete ISO 3166-1 country list, compiled into the binary. The
//! table is immutable; the lookup index and the sorted display-name list
//! are built once per process on first use.
//!
//! ## Lookup keys
//!
//! [`resolve_country`] accepts, case-insensitively and ignoring surrounding
//! whitespace:
//!
//! - the display name (`"United States"`),
//! - a listed alias (`"United States of America"`),
//! - the alpha-2 code (`"us"`),
//! - the alpha-3 code (`"USA"`),
//! - the numeric code (`"840"`).
//!
//! Aliases carry the ISO official and common names where they differ from
//! the display name.
//!
//! Anything else is a miss. There is no fuzzy matching.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::identity::CountryCode;

/// Revision of the ISO 3166-1 list the table was taken from.
pub const COUNTRY_TABLE_VERSION: &str = "ISO 3166-1:2020 (249 entries)";

/// One row of the country reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryReference {
    /// Display name, as offered in the country selector.
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code.
    pub iso_code: &'static str,
    /// ISO 3166-1 alpha-3 code.
    pub alpha3: &'static str,
    /// ISO 3166-1 numeric code, zero-padded to three digits.
    pub numeric: &'static str,
    /// Common or official names accepted as lookup keys.
    #[serde(skip_serializing_if = "no_aliases")]
    pub aliases: &'static [&'static str],
}

fn no_aliases(aliases: &&[&str]) -> bool {
    aliases.is_empty()
}

impl CountryReference {
    const fn new(
        iso_code: &'static str,
        alpha3: &'static str,
        numeric: &'static str,
        name: &'static str,
    ) -> Self {
        Self::with_aliases(iso_code, alpha3, numeric, name, &[])
    }

    const fn with_aliases(
        iso_code: &'static str,
        alpha3: &'static str,
        numeric: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            iso_code,
            alpha3,
            numeric,
            aliases,
        }
    }

    /// The alpha-2 code as a validated [`CountryCode`].
    pub fn code(&self) -> CountryCode {
        CountryCode::from_table(self.iso_code)
    }

    fn keys(&self) -> impl Iterator<Item = &'static str> {
        [self.name, self.iso_code, self.alpha3, self.numeric]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }
}

static COUNTRIES: &[CountryReference] = &[
    CountryReference::with_aliases("AD", "AND", "020", "Andorra", &["Principality of Andorra"]),
    CountryReference::new("AE", "ARE", "784", "United Arab Emirates"),
    CountryReference::with_aliases("AF", "AFG", "004", "Afghanistan", &["Islamic Republic of Afghanistan"]),
    CountryReference::new("AG", "ATG", "028", "Antigua and Barbuda"),
    CountryReference::new("AI", "AIA", "660", "Anguilla"),
    CountryReference::with_aliases("AL", "ALB", "008", "Albania", &["Republic of Albania"]),
    CountryReference::with_aliases("AM", "ARM", "051", "Armenia", &["Republic of Armenia"]),
    CountryReference::with_aliases("AO", "AGO", "024", "Angola", &["Republic of Angola"]),
    CountryReference::new("AQ", "ATA", "010", "Antarctica"),
    CountryReference::with_aliases("AR", "ARG", "032", "Argentina", &["Argentine Republic"]),
    CountryReference::new("AS", "ASM", "016", "American Samoa"),
    CountryReference::with_aliases("AT", "AUT", "040", "Austria", &["Republic of Austria"]),
    CountryReference::new("AU", "AUS", "036", "Australia"),
    CountryReference::new("AW", "ABW", "533", "Aruba"),
    CountryReference::new("AX", "ALA", "248", "Åland Islands"),
    CountryReference::with_aliases("AZ", "AZE", "031", "Azerbaijan", &["Republic of Azerbaijan"]),
    CountryReference::with_aliases("BA", "BIH", "070", "Bosnia and Herzegovina", &["Republic of Bosnia and Herzegovina"]),
    CountryReference::new("BB", "BRB", "052", "Barbados"),
    CountryReference::with_aliases("BD", "BGD", "050", "Bangladesh", &["People's Republic of Bangladesh"]),
    CountryReference::with_aliases("BE", "BEL", "056", "Belgium", &["Kingdom of Belgium"]),
    CountryReference::new("BF", "BFA", "854", "Burkina Faso"),
    CountryReference::with_aliases("BG", "BGR", "100", "Bulgaria", &["Republic of Bulgaria"]),
    CountryReference::with_aliases("BH", "BHR", "048", "Bahrain", &["Kingdom of Bahrain"]),
    CountryReference::with_aliases("BI", "BDI", "108", "Burundi", &["Republic of Burundi"]),
    CountryReference::with_aliases("BJ", "BEN", "204", "Benin", &["Republic of Benin"]),
    CountryReference::new("BL", "BLM", "652", "Saint Barthélemy"),
    CountryReference::new("BM", "BMU", "060", "Bermuda"),
    CountryReference::with_aliases("BN", "BRN", "096", "Brunei Darussalam", &["Brunei"]),
    CountryReference::with_aliases("BO", "BOL", "068", "Bolivia, Plurinational State of", &["Bolivia", "Plurinational State of Bolivia"]),
    CountryReference::new("BQ", "BES", "535", "Bonaire, Sint Eustatius and Saba"),
    CountryReference::with_aliases("BR", "BRA", "076", "Brazil", &["Federative Republic of Brazil"]),
    CountryReference::with_aliases("BS", "BHS", "044", "Bahamas", &["Commonwealth of the Bahamas"]),
    CountryReference::with_aliases("BT", "BTN", "064", "Bhutan", &["Kingdom of Bhutan"]),
    CountryReference::new("BV", "BVT", "074", "Bouvet Island"),
    CountryReference::with_aliases("BW", "BWA", "072", "Botswana", &["Republic of Botswana"]),
    CountryReference::with_aliases("BY", "BLR", "112", "Belarus", &["Republic of Belarus"]),
    CountryReference::new("BZ", "BLZ", "084", "Belize"),
    CountryReference::new("CA", "CAN", "124", "Canada"),
    CountryReference::new("CC", "CCK", "166", "Cocos (Keeling) Islands"),
    CountryReference::with_aliases("CD", "COD", "180", "Congo, The Democratic Republic of the", &["Democratic Republic of the Congo"]),
    CountryReference::new("CF", "CAF", "140", "Central African Republic"),
    CountryReference::with_aliases("CG", "COG", "178", "Congo", &["Republic of the Congo"]),
    CountryReference::with_aliases("CH", "CHE", "756", "Switzerland", &["Swiss Confederation"]),
    CountryReference::with_aliases("CI", "CIV", "384", "Côte d'Ivoire", &["Ivory Coast", "Republic of Côte d'Ivoire"]),
    CountryReference::new("CK", "COK", "184", "Cook Islands"),
    CountryReference::with_aliases("CL", "CHL", "152", "Chile", &["Republic of Chile"]),
    CountryReference::with_aliases("CM", "CMR", "120", "Cameroon", &["Republic of Cameroon"]),
    CountryReference::with_aliases("CN", "CHN", "156", "China", &["People's Republic of China"]),
    CountryReference::with_aliases("CO", "COL", "170", "Colombia", &["Republic of Colombia"]),
    CountryReference::with_aliases("CR", "CRI", "188", "Costa Rica", &["Republic of Costa Rica"]),
    CountryReference::with_aliases("CU", "CUB", "192", "Cuba", &["Republic of Cuba"]),
    CountryReference::with_aliases("CV", "CPV", "132", "Cabo Verde", &["Cape Verde", "Republic of Cabo Verde"]),
    CountryReference::new("CW", "CUW", "531", "Curaçao"),
    CountryReference::new("CX", "CXR", "162", "Christmas Island"),
    CountryReference::with_aliases("CY", "CYP", "196", "Cyprus", &["Republic of Cyprus"]),
    CountryReference::with_aliases("CZ", "CZE", "203", "Czechia", &["Czech Republic"]),
    CountryReference::with_aliases("DE", "DEU", "276", "Germany", &["Federal Republic of Germany"]),
    CountryReference::with_aliases("DJ", "DJI", "262", "Djibouti", &["Republic of Djibouti"]),
    CountryReference::with_aliases("DK", "DNK", "208", "Denmark", &["Kingdom of Denmark"]),
    CountryReference::with_aliases("DM", "DMA", "212", "Dominica", &["Commonwealth of Dominica"]),
    CountryReference::new("DO", "DOM", "214", "Dominican Republic"),
    CountryReference::with_aliases("DZ", "DZA", "012", "Algeria", &["People's Democratic Republic of Algeria"]),
    CountryReference::with_aliases("EC", "ECU", "218", "Ecuador", &["Republic of Ecuador"]),
    CountryReference::with_aliases("EE", "EST", "233", "Estonia", &["Republic of Estonia"]),
    CountryReference::with_aliases("EG", "EGY", "818", "Egypt", &["Arab Republic of Egypt"]),
    CountryReference::new("EH", "ESH", "732", "Western Sahara"),
    CountryReference::with_aliases("ER", "ERI", "232", "Eritrea", &["the State of Eritrea"]),
    CountryReference::with_aliases("ES", "ESP", "724", "Spain", &["Kingdom of Spain"]),
    CountryReference::with_aliases("ET", "ETH", "231", "Ethiopia", &["Federal Democratic Republic of Ethiopia"]),
    CountryReference::with_aliases("FI", "FIN", "246", "Finland", &["Republic of Finland"]),
    CountryReference::with_aliases("FJ", "FJI", "242", "Fiji", &["Republic of Fiji"]),
    CountryReference::new("FK", "FLK", "238", "Falkland Islands (Malvinas)"),
    CountryReference::with_aliases("FM", "FSM", "583", "Micronesia, Federated States of", &["Micronesia", "Federated States of Micronesia"]),
    CountryReference::new("FO", "FRO", "234", "Faroe Islands"),
    CountryReference::with_aliases("FR", "FRA", "250", "France", &["French Republic"]),
    CountryReference::with_aliases("GA", "GAB", "266", "Gabon", &["Gabonese Republic"]),
    CountryReference::with_aliases("GB", "GBR", "826", "United Kingdom", &["United Kingdom of Great Britain and Northern Ireland"]),
    CountryReference::new("GD", "GRD", "308", "Grenada"),
    CountryReference::new("GE", "GEO", "268", "Georgia"),
    CountryReference::new("GF", "GUF", "254", "French Guiana"),
    CountryReference::new("GG", "GGY", "831", "Guernsey"),
    CountryReference::with_aliases("GH", "GHA", "288", "Ghana", &["Republic of Ghana"]),
    CountryReference::new("GI", "GIB", "292", "Gibraltar"),
    CountryReference::new("GL", "GRL", "304", "Greenland"),
    CountryReference::with_aliases("GM", "GMB", "270", "Gambia", &["Republic of the Gambia"]),
    CountryReference::with_aliases("GN", "GIN", "324", "Guinea", &["Republic of Guinea"]),
    CountryReference::new("GP", "GLP", "312", "Guadeloupe"),
    CountryReference::with_aliases("GQ", "GNQ", "226", "Equatorial Guinea", &["Republic of Equatorial Guinea"]),
    CountryReference::with_aliases("GR", "GRC", "300", "Greece", &["Hellenic Republic"]),
    CountryReference::new("GS", "SGS", "239", "South Georgia and the South Sandwich Islands"),
    CountryReference::with_aliases("GT", "GTM", "320", "Guatemala", &["Republic of Guatemala"]),
    CountryReference::new("GU", "GUM", "316", "Guam"),
    CountryReference::with_aliases("GW", "GNB", "624", "Guinea-Bissau", &["Republic of Guinea-Bissau"]),
    CountryReference::with_aliases("GY", "GUY", "328", "Guyana", &["Republic of Guyana"]),
    CountryReference::with_aliases("HK", "HKG", "344", "Hong Kong", &["Hong Kong Special Administrative Region of China"]),
    CountryReference::new("HM", "HMD", "334", "Heard Island and McDonald Islands"),
    CountryReference::with_aliases("HN", "HND", "340", "Honduras", &["Republic of Honduras"]),
    CountryReference::with_aliases("HR", "HRV", "191", "Croatia", &["Republic of Croatia"]),
    CountryReference::with_aliases("HT", "HTI", "332", "Haiti", &["Republic of Haiti"]),
    CountryReference::new("HU", "HUN", "348", "Hungary"),
    CountryReference::with_aliases("ID", "IDN", "360", "Indonesia", &["Republic of Indonesia"]),
    CountryReference::new("IE", "IRL", "372", "Ireland"),
    CountryReference::with_aliases("IL", "ISR", "376", "Israel", &["State of Israel"]),
    CountryReference::new("IM", "IMN", "833", "Isle of Man"),
    CountryReference::with_aliases("IN", "IND", "356", "India", &["Republic of India"]),
    CountryReference::new("IO", "IOT", "086", "British Indian Ocean Territory"),
    CountryReference::with_aliases("IQ", "IRQ", "368", "Iraq", &["Republic of Iraq"]),
    CountryReference::with_aliases("IR", "IRN", "364", "Iran, Islamic Republic of", &["Iran", "Islamic Republic of Iran"]),
    CountryReference::with_aliases("IS", "ISL", "352", "Iceland", &["Republic of Iceland"]),
    CountryReference::with_aliases("IT", "ITA", "380", "Italy", &["Italian Republic"]),
    CountryReference::new("JE", "JEY", "832", "Jersey"),
    CountryReference::new("JM", "JAM", "388", "Jamaica"),
    CountryReference::with_aliases("JO", "JOR", "400", "Jordan", &["Hashemite Kingdom of Jordan"]),
    CountryReference::new("JP", "JPN", "392", "Japan"),
    CountryReference::with_aliases("KE", "KEN", "404", "Kenya", &["Republic of Kenya"]),
    CountryReference::with_aliases("KG", "KGZ", "417", "Kyrgyzstan", &["Kyrgyz Republic"]),
    CountryReference::with_aliases("KH", "KHM", "116", "Cambodia", &["Kingdom of Cambodia"]),
    CountryReference::with_aliases("KI", "KIR", "296", "Kiribati", &["Republic of Kiribati"]),
    CountryReference::with_aliases("KM", "COM", "174", "Comoros", &["Union of the Comoros"]),
    CountryReference::new("KN", "KNA", "659", "Saint Kitts and Nevis"),
    CountryReference::with_aliases("KP", "PRK", "408", "Korea, Democratic People's Republic of", &["North Korea", "Democratic People's Republic of Korea"]),
    CountryReference::with_aliases("KR", "KOR", "410", "Korea, Republic of", &["South Korea"]),
    CountryReference::with_aliases("KW", "KWT", "414", "Kuwait", &["State of Kuwait"]),
    CountryReference::new("KY", "CYM", "136", "Cayman Islands"),
    CountryReference::with_aliases("KZ", "KAZ", "398", "Kazakhstan", &["Republic of Kazakhstan"]),
    CountryReference::with_aliases("LA", "LAO", "418", "Lao People's Democratic Republic", &["Laos"]),
    CountryReference::with_aliases("LB", "LBN", "422", "Lebanon", &["Lebanese Republic"]),
    CountryReference::new("LC", "LCA", "662", "Saint Lucia"),
    CountryReference::with_aliases("LI", "LIE", "438", "Liechtenstein", &["Principality of Liechtenstein"]),
    CountryReference::with_aliases("LK", "LKA", "144", "Sri Lanka", &["Democratic Socialist Republic of Sri Lanka"]),
    CountryReference::with_aliases("LR", "LBR", "430", "Liberia", &["Republic of Liberia"]),
    CountryReference::with_aliases("LS", "LSO", "426", "Lesotho", &["Kingdom of Lesotho"]),
    CountryReference::with_aliases("LT", "LTU", "440", "Lithuania", &["Republic of Lithuania"]),
    CountryReference::with_aliases("LU", "LUX", "442", "Luxembourg", &["Grand Duchy of Luxembourg"]),
    CountryReference::with_aliases("LV", "LVA", "428", "Latvia", &["Republic of Latvia"]),
    CountryReference::new("LY", "LBY", "434", "Libya"),
    CountryReference::with_aliases("MA", "MAR", "504", "Morocco", &["Kingdom of Morocco"]),
    CountryReference::with_aliases("MC", "MCO", "492", "Monaco", &["Principality of Monaco"]),
    CountryReference::with_aliases("MD", "MDA", "498", "Moldova, Republic of", &["Moldova", "Republic of Moldova"]),
    CountryReference::new("ME", "MNE", "499", "Montenegro"),
    CountryReference::new("MF", "MAF", "663", "Saint Martin (French part)"),
    CountryReference::with_aliases("MG", "MDG", "450", "Madagascar", &["Republic of Madagascar"]),
    CountryReference::with_aliases("MH", "MHL", "584", "Marshall Islands", &["Republic of the Marshall Islands"]),
    CountryReference::with_aliases("MK", "MKD", "807", "North Macedonia", &["Republic of North Macedonia"]),
    CountryReference::with_aliases("ML", "MLI", "466", "Mali", &["Republic of Mali"]),
    CountryReference::with_aliases("MM", "MMR", "104", "Myanmar", &["Republic of Myanmar"]),
    CountryReference::new("MN", "MNG", "496", "Mongolia"),
    CountryReference::with_aliases("MO", "MAC", "446", "Macao", &["Macao Special Administrative Region of China"]),
    CountryReference::with_aliases("MP", "MNP", "580", "Northern Mariana Islands", &["Commonwealth of the Northern Mariana Islands"]),
    CountryReference::new("MQ", "MTQ", "474", "Martinique"),
    CountryReference::with_aliases("MR", "MRT", "478", "Mauritania", &["Islamic Republic of Mauritania"]),
    CountryReference::new("MS", "MSR", "500", "Montserrat"),
    CountryReference::with_aliases("MT", "MLT", "470", "Malta", &["Republic of Malta"]),
    CountryReference::with_aliases("MU", "MUS", "480", "Mauritius", &["Republic of Mauritius"]),
    CountryReference::with_aliases("MV", "MDV", "462", "Maldives", &["Republic of Maldives"]),
    CountryReference::with_aliases("MW", "MWI", "454", "Malawi", &["Republic of Malawi"]),
    CountryReference::with_aliases("MX", "MEX", "484", "Mexico", &["United Mexican States"]),
    CountryReference::new("MY", "MYS", "458", "Malaysia"),
    CountryReference::with_aliases("MZ", "MOZ", "508", "Mozambique", &["Republic of Mozambique"]),
    CountryReference::with_aliases("NA", "NAM", "516", "Namibia", &["Republic of Namibia"]),
    CountryReference::new("NC", "NCL", "540", "New Caledonia"),
    CountryReference::with_aliases("NE", "NER", "562", "Niger", &["Republic of the Niger"]),
    CountryReference::new("NF", "NFK", "574", "Norfolk Island"),
    CountryReference::with_aliases("NG", "NGA", "566", "Nigeria", &["Federal Republic of Nigeria"]),
    CountryReference::with_aliases("NI", "NIC", "558", "Nicaragua", &["Republic of Nicaragua"]),
    CountryReference::with_aliases("NL", "NLD", "528", "Netherlands", &["Netherlands, Kingdom of the", "Kingdom of the Netherlands"]),
    CountryReference::with_aliases("NO", "NOR", "578", "Norway", &["Kingdom of Norway"]),
    CountryReference::with_aliases("NP", "NPL", "524", "Nepal", &["Federal Democratic Republic of Nepal"]),
    CountryReference::with_aliases("NR", "NRU", "520", "Nauru", &["Republic of Nauru"]),
    CountryReference::new("NU", "NIU", "570", "Niue"),
    CountryReference::new("NZ", "NZL", "554", "New Zealand"),
    CountryReference::with_aliases("OM", "OMN", "512", "Oman", &["Sultanate of Oman"]),
    CountryReference::with_aliases("PA", "PAN", "591", "Panama", &["Republic of Panama"]),
    CountryReference::with_aliases("PE", "PER", "604", "Peru", &["Republic of Peru"]),
    CountryReference::new("PF", "PYF", "258", "French Polynesia"),
    CountryReference::with_aliases("PG", "PNG", "598", "Papua New Guinea", &["Independent State of Papua New Guinea"]),
    CountryReference::with_aliases("PH", "PHL", "608", "Philippines", &["Republic of the Philippines"]),
    CountryReference::with_aliases("PK", "PAK", "586", "Pakistan", &["Islamic Republic of Pakistan"]),
    CountryReference::with_aliases("PL", "POL", "616", "Poland", &["Republic of Poland"]),
    CountryReference::new("PM", "SPM", "666", "Saint Pierre and Miquelon"),
    CountryReference::new("PN", "PCN", "612", "Pitcairn"),
    CountryReference::new("PR", "PRI", "630", "Puerto Rico"),
    CountryReference::with_aliases("PS", "PSE", "275", "Palestine, State of", &["Palestine", "the State of Palestine"]),
    CountryReference::with_aliases("PT", "PRT", "620", "Portugal", &["Portuguese Republic"]),
    CountryReference::with_aliases("PW", "PLW", "585", "Palau", &["Republic of Palau"]),
    CountryReference::with_aliases("PY", "PRY", "600", "Paraguay", &["Republic of Paraguay"]),
    CountryReference::with_aliases("QA", "QAT", "634", "Qatar", &["State of Qatar"]),
    CountryReference::new("RE", "REU", "638", "Réunion"),
    CountryReference::new("RO", "ROU", "642", "Romania"),
    CountryReference::with_aliases("RS", "SRB", "688", "Serbia", &["Republic of Serbia"]),
    CountryReference::with_aliases("RU", "RUS", "643", "Russian Federation", &["Russia"]),
    CountryReference::with_aliases("RW", "RWA", "646", "Rwanda", &["Rwandese Republic"]),
    CountryReference::with_aliases("SA", "SAU", "682", "Saudi Arabia", &["Kingdom of Saudi Arabia"]),
    CountryReference::new("SB", "SLB", "090", "Solomon Islands"),
    CountryReference::with_aliases("SC", "SYC", "690", "Seychelles", &["Republic of Seychelles"]),
    CountryReference::with_aliases("SD", "SDN", "729", "Sudan", &["Republic of the Sudan"]),
    CountryReference::with_aliases("SE", "SWE", "752", "Sweden", &["Kingdom of Sweden"]),
    CountryReference::with_aliases("SG", "SGP", "702", "Singapore", &["Republic of Singapore"]),
    CountryReference::new("SH", "SHN", "654", "Saint Helena, Ascension and Tristan da Cunha"),
    CountryReference::with_aliases("SI", "SVN", "705", "Slovenia", &["Republic of Slovenia"]),
    CountryReference::new("SJ", "SJM", "744", "Svalbard and Jan Mayen"),
    CountryReference::with_aliases("SK", "SVK", "703", "Slovakia", &["Slovak Republic"]),
    CountryReference::with_aliases("SL", "SLE", "694", "Sierra Leone", &["Republic of Sierra Leone"]),
    CountryReference::with_aliases("SM", "SMR", "674", "San Marino", &["Republic of San Marino"]),
    CountryReference::with_aliases("SN", "SEN", "686", "Senegal", &["Republic of Senegal"]),
    CountryReference::with_aliases("SO", "SOM", "706", "Somalia", &["Federal Republic of Somalia"]),
    CountryReference::with_aliases("SR", "SUR", "740", "Suriname", &["Republic of Suriname"]),
    CountryReference::with_aliases("SS", "SSD", "728", "South Sudan", &["Republic of South Sudan"]),
    CountryReference::with_aliases("ST", "STP", "678", "Sao Tome and Principe", &["Democratic Republic of Sao Tome and Principe"]),
    CountryReference::with_aliases("SV", "SLV", "222", "El Salvador", &["Republic of El Salvador"]),
    CountryReference::new("SX", "SXM", "534", "Sint Maarten (Dutch part)"),
    CountryReference::with_aliases("SY", "SYR", "760", "Syrian Arab Republic", &["Syria"]),
    CountryReference::with_aliases("SZ", "SWZ", "748", "Eswatini", &["Swaziland", "Kingdom of Eswatini"]),
    CountryReference::new("TC", "TCA", "796", "Turks and Caicos Islands"),
    CountryReference::with_aliases("TD", "TCD", "148", "Chad", &["Republic of Chad"]),
    CountryReference::new("TF", "ATF", "260", "French Southern Territories"),
    CountryReference::with_aliases("TG", "TGO", "768", "Togo", &["Togolese Republic"]),
    CountryReference::with_aliases("TH", "THA", "764", "Thailand", &["Kingdom of Thailand"]),
    CountryReference::with_aliases("TJ", "TJK", "762", "Tajikistan", &["Republic of Tajikistan"]),
    CountryReference::new("TK", "TKL", "772", "Tokelau"),
    CountryReference::with_aliases("TL", "TLS", "626", "Timor-Leste", &["Democratic Republic of Timor-Leste"]),
    CountryReference::new("TM", "TKM", "795", "Turkmenistan"),
    CountryReference::with_aliases("TN", "TUN", "788", "Tunisia", &["Republic of Tunisia"]),
    CountryReference::with_aliases("TO", "TON", "776", "Tonga", &["Kingdom of Tonga"]),
    CountryReference::with_aliases("TR", "TUR", "792", "Türkiye", &["Turkey", "Republic of Türkiye"]),
    CountryReference::with_aliases("TT", "TTO", "780", "Trinidad and Tobago", &["Republic of Trinidad and Tobago"]),
    CountryReference::new("TV", "TUV", "798", "Tuvalu"),
    CountryReference::with_aliases("TW", "TWN", "158", "Taiwan, Province of China", &["Taiwan"]),
    CountryReference::with_aliases("TZ", "TZA", "834", "Tanzania, United Republic of", &["Tanzania", "United Republic of Tanzania"]),
    CountryReference::new("UA", "UKR", "804", "Ukraine"),
    CountryReference::with_aliases("UG", "UGA", "800", "Uganda", &["Republic of Uganda"]),
    CountryReference::new("UM", "UMI", "581", "United States Minor Outlying Islands"),
    CountryReference::with_aliases("US", "USA", "840", "United States", &["United States of America"]),
    CountryReference::with_aliases("UY", "URY", "858", "Uruguay", &["Eastern Republic of Uruguay"]),
    CountryReference::with_aliases("UZ", "UZB", "860", "Uzbekistan", &["Republic of Uzbekistan"]),
    CountryReference::with_aliases("VA", "VAT", "336", "Holy See (Vatican City State)", &["Vatican City"]),
    CountryReference::new("VC", "VCT", "670", "Saint Vincent and the Grenadines"),
    CountryReference::with_aliases("VE", "VEN", "862", "Venezuela, Bolivarian Republic of", &["Venezuela", "Bolivarian Republic of Venezuela"]),
    CountryReference::with_aliases("VG", "VGB", "092", "Virgin Islands, British", &["British Virgin Islands"]),
    CountryReference::with_aliases("VI", "VIR", "850", "Virgin Islands, U.S.", &["United States Virgin Islands", "Virgin Islands of the United States"]),
    CountryReference::with_aliases("VN", "VNM", "704", "Viet Nam", &["Vietnam", "Socialist Republic of Viet Nam"]),
    CountryReference::with_aliases("VU", "VUT", "548", "Vanuatu", &["Republic of Vanuatu"]),
    CountryReference::new("WF", "WLF", "876", "Wallis and Futuna"),
    CountryReference::with_aliases("WS", "WSM", "882", "Samoa", &["Independent State of Samoa"]),
    CountryReference::with_aliases("YE", "YEM", "887", "Yemen", &["Republic of Yemen"]),
    CountryReference::new("YT", "MYT", "175", "Mayotte"),
    CountryReference::with_aliases("ZA", "ZAF", "710", "South Africa", &["Republic of South Africa"]),
    CountryReference::with_aliases("ZM", "ZMB", "894", "Zambia", &["Republic of Zambia"]),
    CountryReference::with_aliases("ZW", "ZWE", "716", "Zimbabwe", &["Republic of Zimbabwe"]),
];

static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();
static SORTED_NAMES: OnceLock<Vec<&'static str>> = OnceLock::new();

fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn index() -> &'static HashMap<String, usize> {
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(COUNTRIES.len() * 4);
        for (idx, country) in COUNTRIES.iter().enumerate() {
            for key in country.keys() {
                map.entry(normalize_key(key)).or_insert(idx);
            }
        }
        map
    })
}

/// Every row of the reference table, ordered by alpha-2 code.
pub fn countries() -> &'static [CountryReference] {
    COUNTRIES
}

/// All display names, sorted by code point.
pub fn country_names() -> &'static [&'static str] {
    SORTED_NAMES.get_or_init(|| {
        let mut names: Vec<&'static str> = COUNTRIES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names
    })
}

/// Find the table row for a name, alias, or code.
pub fn lookup(name: &str) -> Option<&'static CountryReference> {
    index()
        .get(&normalize_key(name))
        .and_then(|&idx| COUNTRIES.get(idx))
}

/// Resolve a country name to its alpha-2 code.
///
/// Returns `None` when the input matches no row of the table.
pub fn resolve_country(name: &str) -> Option<CountryCode> {
    lookup(name).map(CountryReference::code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_complete() {
        assert_eq!(COUNTRIES.len(), 249);
    }

    #[test]
    fn table_codes_are_valid_and_unique() {
        let mut alpha2 = HashSet::new();
        let mut alpha3 = HashSet::new();
        let mut numeric = HashSet::new();
        for country in COUNTRIES {
            assert!(CountryCode::new(country.iso_code).is_ok(), "{}", country.iso_code);
            assert_eq!(country.alpha3.len(), 3, "{}", country.alpha3);
            assert_eq!(country.numeric.len(), 3, "{}", country.numeric);
            assert!(country.numeric.bytes().all(|b| b.is_ascii_digit()));
            assert!(alpha2.insert(country.iso_code), "duplicate {}", country.iso_code);
            assert!(alpha3.insert(country.alpha3), "duplicate {}", country.alpha3);
            assert!(numeric.insert(country.numeric), "duplicate {}", country.numeric);
        }
    }

    #[test]
    fn lookup_keys_are_unambiguous() {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for country in COUNTRIES {
            for key in country.keys() {
                if let Some(prev) = seen.insert(normalize_key(key), country.iso_code) {
                    panic!("key {key:?} shared by {prev} and {}", country.iso_code);
                }
            }
        }
    }

    #[test]
    fn united_states_resolves_to_us() {
        assert_eq!(resolve_country("United States").unwrap().as_str(), "US");
    }

    #[test]
    fn every_display_name_resolves_to_its_code() {
        for country in COUNTRIES {
            let code = resolve_country(country.name)
                .unwrap_or_else(|| panic!("{} did not resolve", country.name));
            assert_eq!(code.as_str(), country.iso_code);
            assert_eq!(code.as_str().len(), 2);
        }
    }

    #[test]
    fn lookup_accepts_codes_aliases_and_case_variants() {
        assert_eq!(resolve_country("de").unwrap().as_str(), "DE");
        assert_eq!(resolve_country("DEU").unwrap().as_str(), "DE");
        assert_eq!(resolve_country("  germany ").unwrap().as_str(), "DE");
        assert_eq!(resolve_country("South Korea").unwrap().as_str(), "KR");
        assert_eq!(resolve_country("Korea, Republic of").unwrap().as_str(), "KR");
        assert_eq!(resolve_country("CÔTE D'IVOIRE").unwrap().as_str(), "CI");
        assert_eq!(resolve_country("åland islands").unwrap().as_str(), "AX");
    }

    #[test]
    fn lookup_accepts_numeric_and_official_names() {
        assert_eq!(resolve_country("840").unwrap().as_str(), "US");
        assert_eq!(resolve_country(" 276 ").unwrap().as_str(), "DE");
        assert_eq!(resolve_country("068").unwrap().as_str(), "BO");
        assert_eq!(resolve_country("Plurinational State of Bolivia").unwrap().as_str(), "BO");
        assert_eq!(resolve_country("Taiwan").unwrap().as_str(), "TW");
        assert_eq!(lookup("USA").unwrap().numeric, "840");
        assert!(resolve_country("68").is_none());
    }

    #[test]
    fn unknown_names_miss() {
        assert!(resolve_country("").is_none());
        assert!(resolve_country("Atlantis").is_none());
        assert!(resolve_country("United").is_none());
        assert!(resolve_country("XX").is_none());
    }

    #[test]
    fn country_names_sorted_and_complete() {
        let names = country_names();
        assert_eq!(names.len(), COUNTRIES.len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(names.first(), Some(&"Afghanistan"));
        // Code-point ordering puts accented initials last.
        assert_eq!(names.last(), Some(&"Åland Islands"));
    }

    #[test]
    fn reference_serializes_without_empty_aliases() {
        let json = serde_json::to_value(lookup("FR").unwrap()).unwrap();
        assert_eq!(json["iso_code"], "FR");
        assert!(json.get("aliases").is_none());
    }

    proptest! {
        /// Resolution never panics and any hit is a two-letter code.
        #[test]
        fn resolve_never_panics(input in "\\PC{0,40}") {
            if let Some(code) = resolve_country(&input) {
                prop_assert_eq!(code.as_str().len(), 2);
            }
        }

        /// Case and padding do not change the result for table names.
        #[test]
        fn resolve_ignores_case_and_padding(idx in 0usize..249, pad in " {0,3}") {
            let country = &COUNTRIES[idx];
            let input = format!("{pad}{}{pad}", country.name.to_uppercase());
            let code = resolve_country(&input);
            prop_assert_eq!(code.map(|c| c.as_str().to_string()), Some(country.iso_code.to_string()));
        }
    }
}
