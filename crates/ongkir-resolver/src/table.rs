//! Static delivery area data
//!
//! Store origin: Ds. Karangjati, Kec. Susukan, Kab. Banjarnegara, Jawa Tengah.
//! Coverage is southern Central Java. The table is immutable for the process
//! lifetime; its order is the resolution precedence (nearest tier first).

use ongkir_domain::{DistanceRange, StoreInfo, TierId};

/// One geographic pricing tier
#[derive(Debug)]
pub struct TierDefinition {
    /// Tier identifier
    pub id: TierId,
    /// Lowercase place names and aliases, scanned in listed order
    pub keywords: &'static [&'static str],
    /// Fee in rupiah
    pub fee: u64,
    /// Display name
    pub area_name: &'static str,
    /// Display description
    pub description: &'static str,
    /// Inclusive distance bracket from the store
    pub distance_range: DistanceRange,
}

/// Geographic tiers, nearest to farthest.
pub static TIERS: [TierDefinition; 7] = [
    TierDefinition {
        id: TierId::Free,
        keywords: &[
            // Susukan (store location)
            "susukan",
            "desa susukan",
            "kecamatan susukan",
            "kec susukan",
            "kec. susukan",
            "karangjati",
            "desa karangjati",
            "ds karangjati",
            "ds. karangjati",
            // villages in Kec. Susukan
            "banjar susukan",
            "kutabanjarnegara",
            "rejasa",
            "parakancanggah",
            "pakuran",
            "banjarsari susukan",
            "pakisan susukan",
            "kaliwadas susukan",
        ],
        fee: 0,
        area_name: "Susukan (Area Toko)",
        description: "Area sekitar toko - GRATIS ONGKIR! 🎉",
        distance_range: DistanceRange::new(0.0, 3.0),
    },
    TierDefinition {
        id: TierId::Tier1,
        keywords: &[
            // Banjarnegara town centre
            "banjarnegara",
            "banjarnegara kota",
            "kota banjarnegara",
            "jalan raya banjarnegara",
            "alun-alun banjarnegara",
            "pasar banjarnegara",
            "terminal banjarnegara",
            "stasiun banjarnegara",
            "puskesmas banjarnegara",
            "kantor bupati",
            "pendopo banjarnegara",
            "masjid agung banjarnegara",
            // Kalibening
            "kalibening",
            "desa kalibening",
            "kecamatan kalibening",
            "kec kalibening",
            "banjarparakan",
            "kertayasa",
            "karanganyar kalibening",
        ],
        fee: 3000,
        area_name: "Kecamatan Terdekat",
        description: "Banjarnegara Kota & Kalibening - Rp 3.000",
        distance_range: DistanceRange::new(3.0, 8.0),
    },
    TierDefinition {
        id: TierId::Tier2,
        keywords: &[
            "sigaluh",
            "desa sigaluh",
            "kecamatan sigaluh",
            "kec sigaluh",
            "wanayasa",
            "desa wanayasa",
            "kecamatan wanayasa",
            "kec wanayasa",
            "pandanarum",
            "desa pandanarum",
            "kecamatan pandanarum",
            "kec pandanarum",
            "pejawaran",
            "desa pejawaran",
            "kecamatan pejawaran",
            "kec pejawaran",
            "batur",
            "desa batur",
            "kecamatan batur",
            "kec batur",
            "pagentan",
            "desa pagentan",
            "kecamatan pagentan",
            "kec pagentan",
        ],
        fee: 5000,
        area_name: "Kecamatan Sekitar",
        description: "Sigaluh, Wanayasa, Pandanarum, Pejawaran, Batur - Rp 5.000",
        distance_range: DistanceRange::new(8.0, 15.0),
    },
    TierDefinition {
        id: TierId::Tier3,
        keywords: &[
            "karangkobar",
            "desa karangkobar",
            "kecamatan karangkobar",
            "dieng",
            "madukara",
            "desa madukara",
            "kecamatan madukara",
            "kec madukara",
            "banjarmangu",
            "desa banjarmangu",
            "kecamatan banjarmangu",
            "kec banjarmangu",
            "pagedongan",
            "desa pagedongan",
            "kecamatan pagedongan",
            "kec pagedongan",
            "wanadadi",
            "desa wanadadi",
            "kecamatan wanadadi",
            "kec wanadadi",
            "punggelan",
            "desa punggelan",
            "kecamatan punggelan",
            "kec punggelan",
            "rakit",
            "desa rakit",
            "kecamatan rakit",
            "kec rakit",
            "purworejo klampok",
            "purwareja klampok",
            "klampok",
            "kec klampok",
            "mandiraja",
            "desa mandiraja",
            "kecamatan mandiraja",
        ],
        fee: 8000,
        area_name: "Ujung Kabupaten",
        description: "Karangkobar, Dieng, Banjarmangu, Punggelan, Rakit - Rp 8.000",
        distance_range: DistanceRange::new(15.0, 25.0),
    },
    TierDefinition {
        id: TierId::Tier4,
        keywords: &[
            // Purbalingga
            "purbalingga",
            "kota purbalingga",
            "kabupaten purbalingga",
            "bojongsari purbalingga",
            "kemangkon purbalingga",
            "mrebet purbalingga",
            "kaligondang purbalingga",
            "bukateja purbalingga",
            // Wonosobo
            "wonosobo",
            "kota wonosobo",
            "kabupaten wonosobo",
            "garung wonosobo",
            "selomerto wonosobo",
            "leksono wonosobo",
            "kalibawang wonosobo",
        ],
        fee: 12000,
        area_name: "Kabupaten Tetangga Dekat",
        description: "Purbalingga & Wonosobo - Rp 12.000",
        distance_range: DistanceRange::new(25.0, 40.0),
    },
    TierDefinition {
        id: TierId::Tier5,
        keywords: &[
            // northern Banyumas
            "banyumas",
            "kabupaten banyumas",
            "rawalo banyumas",
            "kebasen banyumas",
            "kemranjen banyumas",
            "sumpiuh banyumas",
            "tambak banyumas",
            // northern Kebumen
            "kebumen",
            "kabupaten kebumen",
            "alian kebumen",
            "pejagoan kebumen",
            "sruweng kebumen",
            "gombong kebumen",
        ],
        fee: 18000,
        area_name: "Kabupaten Sedang",
        description: "Banyumas & Kebumen (bagian utara) - Rp 18.000",
        distance_range: DistanceRange::new(40.0, 60.0),
    },
    TierDefinition {
        id: TierId::Tier6,
        keywords: &[
            "purwokerto",
            "kota purwokerto",
            "purwokerto utara",
            "purwokerto selatan",
            "purwokerto barat",
            "purwokerto timur",
            "sokaraja",
            "somagede",
            "baturaden",
            "kalibagor",
        ],
        fee: 25000,
        area_name: "Purwokerto",
        description: "Purwokerto & sekitarnya - Rp 25.000",
        distance_range: DistanceRange::new(60.0, 80.0),
    },
];

/// Major cities and regencies outside the service area.
///
/// Checked before any tier keyword: an address naming one of these is never
/// priced as a nearby tier, even if it also shares a village name.
pub static OUT_OF_RANGE_KEYWORDS: &[&str] = &[
    "jakarta",
    "bandung",
    "surabaya",
    "medan",
    "makassar",
    "palembang",
    "semarang",
    "yogyakarta",
    "yogya",
    "jogja",
    "solo",
    "surakarta",
    "magelang",
    "salatiga",
    "klaten",
    "boyolali",
    "karanganyar",
    "cilacap",
    "tegal",
    "pekalongan",
    "kudus",
    "jepara",
    "demak",
    "kendal",
    "batang",
    "brebes",
    "cirebon",
    "indramayu",
    "kuningan",
    "majalengka",
    "sumedang",
];

/// Out-of-range places shown as examples in area listings
pub static OUT_OF_RANGE_EXAMPLES: &[&str] =
    &["jakarta", "bandung", "surabaya", "semarang", "yogyakarta"];

/// Upper bound of the out-of-range bracket shown in area listings
pub const OUT_OF_RANGE_DISPLAY_MAX_KM: f64 = 999.0;

/// Store origin as used in feedback messages
pub const STORE_FEEDBACK_LOCATION: &str = "Ds. Karangjati, Susukan";

/// Farthest geographic tier
pub fn farthest_tier() -> &'static TierDefinition {
    &TIERS[TIERS.len() - 1]
}

/// Textual distance estimate for a tier
pub fn distance_estimate(tier: TierId) -> &'static str {
    match tier {
        TierId::Free => "0-3 km",
        TierId::Tier1 => "3-8 km",
        TierId::Tier2 => "8-15 km",
        TierId::Tier3 => "15-25 km",
        TierId::Tier4 => "25-40 km",
        TierId::Tier5 => "40-60 km",
        TierId::Tier6 => "60-80 km",
        TierId::OutOfRange | TierId::Unknown => "Di luar jangkauan",
    }
}

/// Store origin details
pub fn store_info() -> StoreInfo {
    StoreInfo {
        location: "Ds. Karangjati, Kec. Susukan".to_string(),
        regency: "Kab. Banjarnegara".to_string(),
        province: "Jawa Tengah".to_string(),
        note: "Jarak dihitung dari lokasi toko di Susukan".to_string(),
    }
}

/// Format a rupiah amount with dot thousands separators, e.g. `Rp 35.000`
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {}", grouped)
}
