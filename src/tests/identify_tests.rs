#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, Category};
    use crate::config::IdentifyConfig;
    use crate::error::AppError;
    use crate::identify::{requested_category, Identifier, RandomIdentifier, FALLBACK_CATEGORY};

    #[test]
    fn test_requested_category_known() {
        assert_eq!(requested_category(br#"{"category":"birds"}"#).unwrap(), Category::Birds);
        assert_eq!(requested_category(br#"{"category":"fungi"}"#).unwrap(), Category::Fungi);
        assert_eq!(requested_category(br#"{"category":"plants"}"#).unwrap(), Category::Plants);
    }

    #[test]
    fn test_requested_category_falls_back_silently() {
        let bodies: [&[u8]; 7] = [
            b"{}",
            br#"{"category":null}"#,
            br#"{"category":"insects"}"#,
            br#"{"category":"Birds"}"#,
            br#"{"category":7}"#,
            br#"{"category":false}"#,
            br#"{"image":"aGVsbG8=","extra":true}"#,
        ];
        for body in bodies {
            assert_eq!(
                requested_category(body).unwrap(),
                FALLBACK_CATEGORY,
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
        assert_eq!(FALLBACK_CATEGORY, Category::Plants);
    }

    #[test]
    fn test_requested_category_rejects_bad_bodies() {
        let bodies: [&[u8]; 8] = [
            b"",
            b"   \n",
            b"{not json",
            b"null",
            b"[1,2]",
            b"\"fungi\"",
            br#"{"category":["fungi"]}"#,
            br#"{"category":{"name":"fungi"}}"#,
        ];
        for body in bodies {
            match requested_category(body) {
                Err(AppError::Internal(_)) => {}
                other => panic!("expected Internal error, got {:?}", other.map(|c| c.as_str())),
            }
        }
    }

    #[tokio::test]
    async fn test_random_identifier_stays_in_range() {
        let catalog = Catalog::builtin().unwrap();
        let identifier = RandomIdentifier::new(85..=98);
        for _ in 0..500 {
            let id = identifier.identify(&catalog, Category::Plants).await.unwrap();
            assert!((85..=98).contains(&id.confidence), "confidence {}", id.confidence);
        }
    }

    #[tokio::test]
    async fn test_random_identifier_picks_from_requested_category() {
        let catalog = Catalog::builtin().unwrap();
        let identifier = RandomIdentifier::new(85..=98);
        let fungi: Vec<&str> =
            catalog.species(Category::Fungi).iter().map(|e| e.scientific_name.as_str()).collect();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let id = identifier.identify(&catalog, Category::Fungi).await.unwrap();
            assert!(fungi.contains(&id.species.as_str()));
            assert_eq!(id.category, "Fungus");
            let entry = catalog.find(Category::Fungi, &id.species).unwrap();
            assert_eq!(id.record.common_name, entry.record.common_name);
            assert_eq!(id.record.warning, entry.record.warning);
            seen.insert(id.species);
        }
        // 300 uniform draws over 3 keys: missing one has probability ~3 * (2/3)^300
        assert_eq!(seen.len(), 3);
    }

    #[tokio::test]
    async fn test_random_identifier_degenerate_range() {
        let catalog = Catalog::builtin().unwrap();
        let identifier = RandomIdentifier::from_config(&IdentifyConfig { min_confidence: 90, max_confidence: 90 });
        let id = identifier.identify(&catalog, Category::Birds).await.unwrap();
        assert_eq!(id.confidence, 90);
        assert_eq!(id.category, "Bird");
        assert!(chrono::DateTime::parse_from_rfc3339(&id.timestamp).is_ok());
    }

    #[tokio::test]
    #[allow(clippy::reversed_empty_ranges)]
    async fn test_random_identifier_empty_range_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        let identifier = RandomIdentifier::new(98..=85);
        assert!(matches!(
            identifier.identify(&catalog, Category::Birds).await,
            Err(AppError::Internal(_))
        ));
    }
}
