//! Card image lookups for the autocard overlay.

const IMAGE_HANDLER: &str = "https://gatherer.wizards.com/Handlers/Image.ashx?type=card&name=";

/// Image URL for a card name. No validation happens here or downstream; a
/// name the handler doesn't know just yields a broken image in the overlay.
pub fn image_url(card_name: &str) -> String {
    format!("{IMAGE_HANDLER}{}", url_escape(card_name))
}

fn url_escape(text: &str) -> String {
    text.replace('\'', "&apos;")
        .replace('"', "&quot;")
        .replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_quotes_are_escaped() {
        let url = image_url("Summoner's Pact");
        assert_eq!(
            url,
            "https://gatherer.wizards.com/Handlers/Image.ashx?type=card&name=Summoner&apos;s%20Pact"
        );
    }

    #[test]
    fn plain_names_pass_through() {
        assert!(image_url("Forest").ends_with("name=Forest"));
    }
}
