// ============================================================================
// CASING - Key conversion between camelCase and snake_case
// ============================================================================
// Words are split on separators, lower→upper transitions, acronym endings
// ("HTTPServer" → "http", "server") and letter/digit boundaries.
// ============================================================================

/// Split an identifier into lowercase words.
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() && c.is_ascii_digit())
                || (prev.is_ascii_digit() && c.is_alphabetic())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.into_iter().map(|w| w.to_lowercase()).collect()
}

/// `checkInDate` → `check_in_date`
pub fn to_snake_case(input: &str) -> String {
    split_words(input).join("_")
}

/// `check_in_date` → `checkInDate`
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in split_words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_to_snake() {
        assert_eq!(to_snake_case("checkInDate"), "check_in_date");
        assert_eq!(to_snake_case("noOfRooms"), "no_of_rooms");
        assert_eq!(to_snake_case("hotelId"), "hotel_id");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn snake_to_camel() {
        assert_eq!(to_camel_case("check_out_date"), "checkOutDate");
        assert_eq!(to_camel_case("hotel_id"), "hotelId");
        assert_eq!(to_camel_case("noOfRooms"), "noOfRooms");
        assert_eq!(to_camel_case("Check-In date"), "checkInDate");
    }

    #[test]
    fn acronyms_and_digits_are_word_boundaries() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("room2Floor"), "room_2_floor");
        assert_eq!(split_words("__leading__"), vec!["leading"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn camel_round_trip_is_stable() {
        for key in ["hotelId", "noOfRooms", "checkInDate", "checkOutDate"] {
            assert_eq!(to_camel_case(&to_snake_case(key)), key);
        }
    }
}
