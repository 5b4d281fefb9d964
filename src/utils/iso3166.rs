//! ISO 3166-1 country code list.
//!
//! Names follow the ISO 3166-1 short names as published by the Debian
//! iso-codes project, which is what earlier versions of the dataset were
//! built against. Keeping the same spelling keeps cached mappings stable.

use crate::domain::country_resolver::CountryCodeList;
use crate::domain::entities::Country;

/// One entry of the ISO 3166-1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
}

const fn cc(alpha2: &'static str, alpha3: &'static str, name: &'static str) -> CountryCode {
    CountryCode {
        alpha2,
        alpha3,
        name,
    }
}

pub static COUNTRY_CODES: &[CountryCode] = &[
    cc("AW", "ABW", "Aruba"),
    cc("AF", "AFG", "Afghanistan"),
    cc("AO", "AGO", "Angola"),
    cc("AI", "AIA", "Anguilla"),
    cc("AX", "ALA", "Åland Islands"),
    cc("AL", "ALB", "Albania"),
    cc("AD", "AND", "Andorra"),
    cc("AE", "ARE", "United Arab Emirates"),
    cc("AR", "ARG", "Argentina"),
    cc("AM", "ARM", "Armenia"),
    cc("AS", "ASM", "American Samoa"),
    cc("AQ", "ATA", "Antarctica"),
    cc("TF", "ATF", "French Southern Territories"),
    cc("AG", "ATG", "Antigua and Barbuda"),
    cc("AU", "AUS", "Australia"),
    cc("AT", "AUT", "Austria"),
    cc("AZ", "AZE", "Azerbaijan"),
    cc("BI", "BDI", "Burundi"),
    cc("BE", "BEL", "Belgium"),
    cc("BJ", "BEN", "Benin"),
    cc("BQ", "BES", "Bonaire, Sint Eustatius and Saba"),
    cc("BF", "BFA", "Burkina Faso"),
    cc("BD", "BGD", "Bangladesh"),
    cc("BG", "BGR", "Bulgaria"),
    cc("BH", "BHR", "Bahrain"),
    cc("BS", "BHS", "Bahamas"),
    cc("BA", "BIH", "Bosnia and Herzegovina"),
    cc("BL", "BLM", "Saint Barthélemy"),
    cc("BY", "BLR", "Belarus"),
    cc("BZ", "BLZ", "Belize"),
    cc("BM", "BMU", "Bermuda"),
    cc("BO", "BOL", "Bolivia, Plurinational State of"),
    cc("BR", "BRA", "Brazil"),
    cc("BB", "BRB", "Barbados"),
    cc("BN", "BRN", "Brunei Darussalam"),
    cc("BT", "BTN", "Bhutan"),
    cc("BV", "BVT", "Bouvet Island"),
    cc("BW", "BWA", "Botswana"),
    cc("CF", "CAF", "Central African Republic"),
    cc("CA", "CAN", "Canada"),
    cc("CC", "CCK", "Cocos (Keeling) Islands"),
    cc("CH", "CHE", "Switzerland"),
    cc("CL", "CHL", "Chile"),
    cc("CN", "CHN", "China"),
    cc("CI", "CIV", "Côte d'Ivoire"),
    cc("CM", "CMR", "Cameroon"),
    cc("CD", "COD", "Congo, The Democratic Republic of the"),
    cc("CG", "COG", "Congo"),
    cc("CK", "COK", "Cook Islands"),
    cc("CO", "COL", "Colombia"),
    cc("KM", "COM", "Comoros"),
    cc("CV", "CPV", "Cabo Verde"),
    cc("CR", "CRI", "Costa Rica"),
    cc("CU", "CUB", "Cuba"),
    cc("CW", "CUW", "Curaçao"),
    cc("CX", "CXR", "Christmas Island"),
    cc("KY", "CYM", "Cayman Islands"),
    cc("CY", "CYP", "Cyprus"),
    cc("CZ", "CZE", "Czechia"),
    cc("DE", "DEU", "Germany"),
    cc("DJ", "DJI", "Djibouti"),
    cc("DM", "DMA", "Dominica"),
    cc("DK", "DNK", "Denmark"),
    cc("DO", "DOM", "Dominican Republic"),
    cc("DZ", "DZA", "Algeria"),
    cc("EC", "ECU", "Ecuador"),
    cc("EG", "EGY", "Egypt"),
    cc("ER", "ERI", "Eritrea"),
    cc("EH", "ESH", "Western Sahara"),
    cc("ES", "ESP", "Spain"),
    cc("EE", "EST", "Estonia"),
    cc("ET", "ETH", "Ethiopia"),
    cc("FI", "FIN", "Finland"),
    cc("FJ", "FJI", "Fiji"),
    cc("FK", "FLK", "Falkland Islands (Malvinas)"),
    cc("FR", "FRA", "France"),
    cc("FO", "FRO", "Faroe Islands"),
    cc("FM", "FSM", "Micronesia, Federated States of"),
    cc("GA", "GAB", "Gabon"),
    cc("GB", "GBR", "United Kingdom"),
    cc("GE", "GEO", "Georgia"),
    cc("GG", "GGY", "Guernsey"),
    cc("GH", "GHA", "Ghana"),
    cc("GI", "GIB", "Gibraltar"),
    cc("GN", "GIN", "Guinea"),
    cc("GP", "GLP", "Guadeloupe"),
    cc("GM", "GMB", "Gambia"),
    cc("GW", "GNB", "Guinea-Bissau"),
    cc("GQ", "GNQ", "Equatorial Guinea"),
    cc("GR", "GRC", "Greece"),
    cc("GD", "GRD", "Grenada"),
    cc("GL", "GRL", "Greenland"),
    cc("GT", "GTM", "Guatemala"),
    cc("GF", "GUF", "French Guiana"),
    cc("GU", "GUM", "Guam"),
    cc("GY", "GUY", "Guyana"),
    cc("HK", "HKG", "Hong Kong"),
    cc("HM", "HMD", "Heard Island and McDonald Islands"),
    cc("HN", "HND", "Honduras"),
    cc("HR", "HRV", "Croatia"),
    cc("HT", "HTI", "Haiti"),
    cc("HU", "HUN", "Hungary"),
    cc("ID", "IDN", "Indonesia"),
    cc("IM", "IMN", "Isle of Man"),
    cc("IN", "IND", "India"),
    cc("IO", "IOT", "British Indian Ocean Territory"),
    cc("IE", "IRL", "Ireland"),
    cc("IR", "IRN", "Iran, Islamic Republic of"),
    cc("IQ", "IRQ", "Iraq"),
    cc("IS", "ISL", "Iceland"),
    cc("IL", "ISR", "Israel"),
    cc("IT", "ITA", "Italy"),
    cc("JM", "JAM", "Jamaica"),
    cc("JE", "JEY", "Jersey"),
    cc("JO", "JOR", "Jordan"),
    cc("JP", "JPN", "Japan"),
    cc("KZ", "KAZ", "Kazakhstan"),
    cc("KE", "KEN", "Kenya"),
    cc("KG", "KGZ", "Kyrgyzstan"),
    cc("KH", "KHM", "Cambodia"),
    cc("KI", "KIR", "Kiribati"),
    cc("KN", "KNA", "Saint Kitts and Nevis"),
    cc("KR", "KOR", "Korea, Republic of"),
    cc("KW", "KWT", "Kuwait"),
    cc("LA", "LAO", "Lao People's Democratic Republic"),
    cc("LB", "LBN", "Lebanon"),
    cc("LR", "LBR", "Liberia"),
    cc("LY", "LBY", "Libya"),
    cc("LC", "LCA", "Saint Lucia"),
    cc("LI", "LIE", "Liechtenstein"),
    cc("LK", "LKA", "Sri Lanka"),
    cc("LS", "LSO", "Lesotho"),
    cc("LT", "LTU", "Lithuania"),
    cc("LU", "LUX", "Luxembourg"),
    cc("LV", "LVA", "Latvia"),
    cc("MO", "MAC", "Macao"),
    cc("MF", "MAF", "Saint Martin (French part)"),
    cc("MA", "MAR", "Morocco"),
    cc("MC", "MCO", "Monaco"),
    cc("MD", "MDA", "Moldova, Republic of"),
    cc("MG", "MDG", "Madagascar"),
    cc("MV", "MDV", "Maldives"),
    cc("MX", "MEX", "Mexico"),
    cc("MH", "MHL", "Marshall Islands"),
    cc("MK", "MKD", "North Macedonia"),
    cc("ML", "MLI", "Mali"),
    cc("MT", "MLT", "Malta"),
    cc("MM", "MMR", "Myanmar"),
    cc("ME", "MNE", "Montenegro"),
    cc("MN", "MNG", "Mongolia"),
    cc("MP", "MNP", "Northern Mariana Islands"),
    cc("MZ", "MOZ", "Mozambique"),
    cc("MR", "MRT", "Mauritania"),
    cc("MS", "MSR", "Montserrat"),
    cc("MQ", "MTQ", "Martinique"),
    cc("MU", "MUS", "Mauritius"),
    cc("MW", "MWI", "Malawi"),
    cc("MY", "MYS", "Malaysia"),
    cc("YT", "MYT", "Mayotte"),
    cc("NA", "NAM", "Namibia"),
    cc("NC", "NCL", "New Caledonia"),
    cc("NE", "NER", "Niger"),
    cc("NF", "NFK", "Norfolk Island"),
    cc("NG", "NGA", "Nigeria"),
    cc("NI", "NIC", "Nicaragua"),
    cc("NU", "NIU", "Niue"),
    cc("NL", "NLD", "Netherlands"),
    cc("NO", "NOR", "Norway"),
    cc("NP", "NPL", "Nepal"),
    cc("NR", "NRU", "Nauru"),
    cc("NZ", "NZL", "New Zealand"),
    cc("OM", "OMN", "Oman"),
    cc("PK", "PAK", "Pakistan"),
    cc("PA", "PAN", "Panama"),
    cc("PN", "PCN", "Pitcairn"),
    cc("PE", "PER", "Peru"),
    cc("PH", "PHL", "Philippines"),
    cc("PW", "PLW", "Palau"),
    cc("PG", "PNG", "Papua New Guinea"),
    cc("PL", "POL", "Poland"),
    cc("PR", "PRI", "Puerto Rico"),
    cc("KP", "PRK", "Korea, Democratic People's Republic of"),
    cc("PT", "PRT", "Portugal"),
    cc("PY", "PRY", "Paraguay"),
    cc("PS", "PSE", "Palestine, State of"),
    cc("PF", "PYF", "French Polynesia"),
    cc("QA", "QAT", "Qatar"),
    cc("RE", "REU", "Réunion"),
    cc("RO", "ROU", "Romania"),
    cc("RU", "RUS", "Russian Federation"),
    cc("RW", "RWA", "Rwanda"),
    cc("SA", "SAU", "Saudi Arabia"),
    cc("SD", "SDN", "Sudan"),
    cc("SN", "SEN", "Senegal"),
    cc("SG", "SGP", "Singapore"),
    cc("GS", "SGS", "South Georgia and the South Sandwich Islands"),
    cc("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    cc("SJ", "SJM", "Svalbard and Jan Mayen"),
    cc("SB", "SLB", "Solomon Islands"),
    cc("SL", "SLE", "Sierra Leone"),
    cc("SV", "SLV", "El Salvador"),
    cc("SM", "SMR", "San Marino"),
    cc("SO", "SOM", "Somalia"),
    cc("PM", "SPM", "Saint Pierre and Miquelon"),
    cc("RS", "SRB", "Serbia"),
    cc("SS", "SSD", "South Sudan"),
    cc("ST", "STP", "Sao Tome and Principe"),
    cc("SR", "SUR", "Suriname"),
    cc("SK", "SVK", "Slovakia"),
    cc("SI", "SVN", "Slovenia"),
    cc("SE", "SWE", "Sweden"),
    cc("SZ", "SWZ", "Eswatini"),
    cc("SX", "SXM", "Sint Maarten (Dutch part)"),
    cc("SC", "SYC", "Seychelles"),
    cc("SY", "SYR", "Syrian Arab Republic"),
    cc("TC", "TCA", "Turks and Caicos Islands"),
    cc("TD", "TCD", "Chad"),
    cc("TG", "TGO", "Togo"),
    cc("TH", "THA", "Thailand"),
    cc("TJ", "TJK", "Tajikistan"),
    cc("TK", "TKL", "Tokelau"),
    cc("TM", "TKM", "Turkmenistan"),
    cc("TL", "TLS", "Timor-Leste"),
    cc("TO", "TON", "Tonga"),
    cc("TT", "TTO", "Trinidad and Tobago"),
    cc("TN", "TUN", "Tunisia"),
    cc("TR", "TUR", "Türkiye"),
    cc("TV", "TUV", "Tuvalu"),
    cc("TW", "TWN", "Taiwan, Province of China"),
    cc("TZ", "TZA", "Tanzania, United Republic of"),
    cc("UG", "UGA", "Uganda"),
    cc("UA", "UKR", "Ukraine"),
    cc("UM", "UMI", "United States Minor Outlying Islands"),
    cc("UY", "URY", "Uruguay"),
    cc("US", "USA", "United States"),
    cc("UZ", "UZB", "Uzbekistan"),
    cc("VA", "VAT", "Holy See (Vatican City State)"),
    cc("VC", "VCT", "Saint Vincent and the Grenadines"),
    cc("VE", "VEN", "Venezuela, Bolivarian Republic of"),
    cc("VG", "VGB", "Virgin Islands, British"),
    cc("VI", "VIR", "Virgin Islands, U.S."),
    cc("VN", "VNM", "Viet Nam"),
    cc("VU", "VUT", "Vanuatu"),
    cc("WF", "WLF", "Wallis and Futuna"),
    cc("WS", "WSM", "Samoa"),
    cc("YE", "YEM", "Yemen"),
    cc("ZA", "ZAF", "South Africa"),
    cc("ZM", "ZMB", "Zambia"),
    cc("ZW", "ZWE", "Zimbabwe"),
];

/// Looks up an entry by its two-letter code (case-insensitive).
pub fn by_alpha2(code: &str) -> Option<&'static CountryCode> {
    COUNTRY_CODES
        .iter()
        .find(|c| c.alpha2.eq_ignore_ascii_case(code))
}

/// Looks up an entry by its three-letter code (case-insensitive).
pub fn by_alpha3(code: &str) -> Option<&'static CountryCode> {
    COUNTRY_CODES
        .iter()
        .find(|c| c.alpha3.eq_ignore_ascii_case(code))
}

/// The built-in ISO 3166-1 table as a [`CountryCodeList`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso3166;

impl CountryCodeList for Iso3166 {
    fn lookup_alpha2(&self, code: &str) -> Option<Country> {
        by_alpha2(code).map(|c| Country::new(c.alpha3, c.name))
    }

    fn lookup_alpha3(&self, code: &str) -> Option<Country> {
        by_alpha3(code).map(|c| Country::new(c.alpha3, c.name))
    }
}
