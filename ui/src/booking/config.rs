/// Static copy and outbound link targets for the widget.
///
/// The widget has no backend, so everything an embedder might want to
/// swap lives here instead of being scattered through component bodies.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingConfig {
    pub from_placeholder: String,
    pub to_placeholder: String,
    pub travelers_placeholder: String,
    pub dates_placeholder: String,
    pub advanced_search_url: String,
    pub bag_rules_url: String,
    pub optional_fees_url: String,
    pub travel_credits_url: String,
    pub cruise_url: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            from_placeholder: "Los Angeles LAX".to_string(),
            to_placeholder: "Destination".to_string(),
            travelers_placeholder: "1 Adult".to_string(),
            dates_placeholder: "MMM DD - MMM DD".to_string(),
            advanced_search_url: "/".to_string(),
            bag_rules_url: "/".to_string(),
            optional_fees_url: "/".to_string(),
            travel_credits_url: "/".to_string(),
            cruise_url: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placeholders_are_present() {
        let config = BookingConfig::default();
        assert_eq!(config.from_placeholder, "Los Angeles LAX");
        assert_eq!(config.to_placeholder, "Destination");
        assert_eq!(config.travelers_placeholder, "1 Adult");
        assert_eq!(config.dates_placeholder, "MMM DD - MMM DD");
    }

    #[test]
    fn test_default_links_point_at_the_site_root() {
        let config = BookingConfig::default();
        assert_eq!(config.advanced_search_url, "/");
        assert_eq!(config.cruise_url, "/");
    }
}
