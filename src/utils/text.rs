use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Turns an API slug into display text: `"fire-red"` becomes `"Fire Red"`.
///
/// Every hyphen-separated token gets an upper-case first character and a
/// lower-case remainder; tokens are joined with single spaces.
pub fn format_text(text: &str) -> String {
    text.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut token: String = first.to_uppercase().collect();
                    token.push_str(&chars.as_str().to_lowercase());
                    token
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn truncate_text_unicode(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }

    let padding = width - text_width;
    let left_padding = padding / 2;
    let right_padding = padding - left_padding;

    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        assert_eq!(format_text("fire-red"), "Fire Red");
        assert_eq!(format_text("overgrow"), "Overgrow");
        assert_eq!(format_text("SPECIAL-attack"), "Special Attack");
        assert_eq!(format_text("true"), "True");
        assert_eq!(format_text(""), "");
    }

    #[test]
    fn test_format_text_keeps_empty_tokens() {
        // Doubled hyphens leave an empty token, which becomes a doubled space.
        assert_eq!(format_text("mr--mime"), "Mr  Mime");
        assert_eq!(format_text("é-clair"), "É Clair");
    }

    #[test]
    fn test_truncate_text_unicode() {
        assert_eq!(truncate_text_unicode("Hello", 10), "Hello");
        assert_eq!(truncate_text_unicode("Hello World!", 8), "Hello...");
        assert_eq!(truncate_text_unicode("", 5), "");
        assert_eq!(truncate_text_unicode("Hello", 2), "..");
    }

    #[test]
    fn test_center_text() {
        assert_eq!(center_text("Hi", 6), "  Hi  ");
        assert_eq!(center_text("Hello", 5), "Hello");
        assert_eq!(center_text("Hi", 12), "     Hi     ");
    }
}
