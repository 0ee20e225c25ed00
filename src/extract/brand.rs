//! Brand inference from product titles.

use crate::model::Brand;

/// Keyword-to-brand table, scanned in order; first hit wins. Sub-brand and
/// product-line names count as brand evidence. "hp " and the "msi" variants
/// carry separators to avoid matching inside unrelated words.
const BRAND_KEYWORDS: [(Brand, &[&str]); 12] = [
    (Brand::Apple, &["apple", "macbook", "mac "]),
    (
        Brand::Lenovo,
        &["lenovo", "thinkpad", "ideapad", "yoga", "legion"],
    ),
    (Brand::Asus, &["asus", "rog", "zenbook", "vivobook", "tuf"]),
    (
        Brand::Dell,
        &["dell", "alienware", "xps", "inspiron", "latitude"],
    ),
    (
        Brand::Hp,
        &[
            "hp ", "hewlett", "omen", "pavilion", "elitebook", "victus", "omnibook",
        ],
    ),
    (Brand::Msi, &["msi ", "msi-", "msi_"]),
    (Brand::Acer, &["acer", "predator", "aspire", "nitro"]),
    (Brand::Microsoft, &["microsoft", "surface"]),
    (Brand::Huawei, &["huawei", "matebook"]),
    (Brand::Samsung, &["samsung", "galaxy book"]),
    (Brand::Monster, &["monster", "tulpar", "abra"]),
    (Brand::Casper, &["casper", "excalibur", "nirvana"]),
];

/// Infer the brand from a product title. Case-insensitive; unmatched titles
/// map to [`Brand::Other`].
#[must_use]
pub fn extract_brand(name: &str) -> Brand {
    let lower = name.to_lowercase();
    for (brand, keywords) in BRAND_KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return brand;
        }
    }
    Brand::Other
}
