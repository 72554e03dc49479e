use super::{Category, SpeciesEntry, SpeciesRecord};

pub(super) fn sections() -> Vec<(Category, Vec<SpeciesEntry>)> {
    vec![(Category::Birds, birds()), (Category::Plants, plants()), (Category::Fungi, fungi())]
}

fn birds() -> Vec<SpeciesEntry> {
    vec![
        SpeciesEntry::new(
            "Turdus migratorius",
            SpeciesRecord::new(
                "American Robin",
                "A common North American bird with a distinctive red breast and melodious song.",
                "Not applicable",
                "Not applicable",
            )
            .with_habitat("Gardens, parks, woodlands")
            .with_conservation_status("Least Concern"),
        ),
        SpeciesEntry::new(
            "Corvus brachyrhynchos",
            SpeciesRecord::new(
                "American Crow",
                "A large, intelligent black bird known for its problem-solving abilities.",
                "Not applicable",
                "Not applicable",
            )
            .with_habitat("Urban areas, farmlands, forests")
            .with_conservation_status("Least Concern"),
        ),
        SpeciesEntry::new(
            "Cardinalidae cardinalis",
            SpeciesRecord::new(
                "Northern Cardinal",
                "A vibrant red bird (males) with a distinctive crest and black face mask.",
                "Not applicable",
                "Not applicable",
            )
            .with_habitat("Woodlands, gardens, shrublands")
            .with_conservation_status("Least Concern"),
        ),
    ]
}

fn plants() -> Vec<SpeciesEntry> {
    vec![
        SpeciesEntry::new(
            "Taraxacum officinale",
            SpeciesRecord::new(
                "Common Dandelion",
                "A widespread flowering plant with yellow flowers and deeply toothed leaves.",
                "Edible - leaves, flowers, and roots are all edible",
                "Rich in vitamins A, C, and K. Used traditionally for liver support and as a diuretic.",
            )
            .with_habitat("Lawns, meadows, roadsides")
            .with_uses("Salads, teas, traditional medicine"),
        ),
        SpeciesEntry::new(
            "Plantago major",
            SpeciesRecord::new(
                "Broadleaf Plantain",
                "A common weed with broad, ribbed leaves arranged in a rosette.",
                "Edible - young leaves can be eaten raw or cooked",
                "Anti-inflammatory properties, used for wound healing and respiratory issues.",
            )
            .with_habitat("Lawns, paths, disturbed soils")
            .with_uses("Natural bandage, herbal tea, salads"),
        ),
        SpeciesEntry::new(
            "Urtica dioica",
            SpeciesRecord::new(
                "Stinging Nettle",
                "A perennial plant with serrated leaves that cause a stinging sensation when touched.",
                "Edible when cooked - neutralizes the sting",
                "High in iron, vitamins, and minerals. Used for allergies and joint pain.",
            )
            .with_habitat("Moist soils, woodlands, gardens")
            .with_uses("Herbal tea, cooked greens, traditional medicine"),
        ),
    ]
}

fn fungi() -> Vec<SpeciesEntry> {
    vec![
        SpeciesEntry::new(
            "Amanita muscaria",
            SpeciesRecord::new(
                "Fly Agaric",
                "A distinctive red mushroom with white spots. Highly toxic and psychoactive.",
                "Poisonous - contains toxic compounds",
                "None - toxic mushroom, historically used in shamanic practices",
            )
            .with_habitat("Coniferous and deciduous forests")
            .with_warning("Extremely dangerous - can cause severe poisoning or death"),
        ),
        SpeciesEntry::new(
            "Agaricus bisporus",
            SpeciesRecord::new(
                "Button Mushroom",
                "The common white mushroom found in grocery stores.",
                "Edible and widely cultivated",
                "Good source of protein, B vitamins, and selenium.",
            )
            .with_habitat("Cultivated commercially, rarely found wild")
            .with_uses("Culinary mushroom, nutritional supplement"),
        ),
        SpeciesEntry::new(
            "Amanita phalloides",
            SpeciesRecord::new(
                "Death Cap",
                "One of the most poisonous mushrooms in the world, responsible for most mushroom poisoning deaths.",
                "Extremely poisonous - often fatal",
                "None - deadly toxic",
            )
            .with_habitat("Oak and other hardwood forests")
            .with_warning("Lethal - no safe amount for consumption"),
        ),
    ]
}
