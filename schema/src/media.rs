//! CDN url templates for artwork and cries, keyed by species id

const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";
const CRY_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/cries/main/cries/pokemon/latest";

/// Official artwork png for a species
pub fn artwork_url(id: u32) -> String {
    format!("{}/{}.png", ARTWORK_BASE, id)
}

/// Latest cry (ogg) for a species
pub fn cry_url(id: u32) -> String {
    format!("{}/{}.ogg", CRY_BASE, id)
}
