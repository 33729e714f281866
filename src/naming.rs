//! URL slug normalization for recipe titles.
//!
//! Every recipe gets a slug derived from its title:
//! - `"Apple Pie"` → `"apple-pie"`
//! - `"Mom's Best (Vegan) Chili!"` → `"mom-s-best-vegan-chili"`
//! - `"Crème Brûlée"` → `"crème-brûlée"`
//!
//! Alphanumeric characters are kept and lowercased; every run of anything
//! else collapses into a single dash. Titles with no alphanumerics at all
//! fall back to [`UNTITLED_SLUG`].

/// Slug used when a title contains nothing to keep.
pub const UNTITLED_SLUG: &str = "untitled";

/// Normalize a title into a lowercase, dash-separated slug.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug
    }
}
