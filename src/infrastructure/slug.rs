// src/infrastructure/slug.rs
use crate::application::ports::util::SlugGenerator;

/// Ukrainian-to-Latin slug scheme used for catalog identifiers.
///
/// Candidates are lower-cased, transliterated through a fixed table, have
/// the redundant word for "cake" stripped, and collapse to hyphen-separated
/// `[a-z0-9]` runs. Any printable input yields a non-empty candidate; the
/// degenerate case falls back to `"cake"`.
#[derive(Default, Clone)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, name: &str, _category: Option<&str>) -> String {
        generate_slug(name)
    }
}

pub fn generate_slug(name: &str) -> String {
    let text = transliterate(name);
    let text = text.replace("торт", "").replace("tort", "");

    let mut slug = String::with_capacity(text.len());
    let mut gap = false;
    for ch in text.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch);
        } else {
            gap = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("cake");
    }
    slug
}

/// Lower-cases and maps Ukrainian Cyrillic to Latin. Letters outside the
/// table pass through lower-cased.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        match latin_for(ch) {
            Some(latin) => out.push_str(latin),
            None => out.push(ch),
        }
    }
    out
}

fn latin_for(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "h",
        'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'є' => "ye",
        'ж' => "zh",
        'з' => "z",
        'и' => "y",
        'і' => "i",
        'ї' => "yi",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        '\'' => "",
        _ => return None,
    };
    Some(latin)
}
