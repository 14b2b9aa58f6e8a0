//! Russian to Latin transliteration for stored file names.

/// Latin spelling of a lowercase Russian letter.
fn latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
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
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "'",
        'ы' => "y",
        'ю' => "ju",
        'я' => "ja",
        _ => return None,
    };

    Some(latin)
}

/// Transliterates Russian letters to Latin, leaving every other character unchanged.
///
/// Capital letters produce a capitalized spelling, so `Щ` becomes `Sch`.
pub fn translit(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        match latin(lower) {
            Some(spelling) if lower != c => {
                let mut chars = spelling.chars();
                if let Some(first) = chars.next() {
                    result.extend(first.to_uppercase());
                    result.push_str(chars.as_str());
                }
            }
            Some(spelling) => result.push_str(spelling),
            None => result.push(c),
        }
    }

    result
}
