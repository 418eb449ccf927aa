use crate::model::{
    ActionItem, BilingualText, GuideDocument, GuideSummary, RawGuide, Step,
};

pub struct Fixture(pub RawGuide);

impl Fixture {
    pub fn hidden(mut self) -> Self {
        self.0.hidden = true;
        self
    }
}

pub fn guide(id: &str, title_en: &str, title_hi: &str) -> Fixture {
    let action = |n: usize, en: &str, hi: &str| ActionItem {
        image: format!("./images/placeholder-{n}.jpg"),
        text: BilingualText::new(en, hi),
    };
    Fixture(RawGuide {
        id: id.to_string(),
        title: BilingualText::new(title_en, title_hi),
        description: BilingualText::new(
            format!("First aid for {title_en}"),
            format!("{title_hi} के लिए प्राथमिक उपचार"),
        ),
        image_url: format!("./images/{id}.jpg"),
        subtitle: BilingualText::new("Act quickly", "जल्दी करें"),
        hero_image: format!("./images/{id}.jpg"),
        hidden: false,
        dos: vec![
            action(1, "Cool under running water for 20 minutes", "20 मिनट तक बहते पानी में ठंडा करें"),
            action(2, "Remove rings, watch and tight items", "अंगूठी, घड़ी और तंग चीजें हटाएं"),
            action(3, "Cover with clean cloth", "साफ कपड़े से ढकें"),
            action(4, "Drink water", "पानी पिएं"),
        ],
        donts: vec![
            action(5, "Don't apply ice", "बर्फ न लगाएं"),
            action(6, "Don't burst blisters", "छाले न फोड़ें"),
        ],
        steps: vec![
            Step {
                title: BilingualText::new("Stop the burning", "जलना रोकें"),
                description: BilingualText::new("Move away from the source", "स्रोत से दूर हटें"),
            },
            Step {
                title: BilingualText::new("Cool the burn", "जले को ठंडा करें"),
                description: BilingualText::new("Use cool running water", "ठंडे बहते पानी का प्रयोग करें"),
            },
        ],
        warnings: vec![BilingualText::new(
            "Burn is larger than your palm",
            "जला हुआ भाग हथेली से बड़ा है",
        )],
        video: None,
    })
}

pub fn document(fixtures: Vec<Fixture>) -> GuideDocument {
    GuideDocument {
        guides: fixtures.into_iter().map(|f| f.0).collect(),
    }
}

pub fn document_json(fixtures: Vec<Fixture>) -> String {
    serde_json::to_string_pretty(&document(fixtures)).expect("fixture serializes")
}

pub fn summary(id: &str, title: (&str, &str), description: (&str, &str)) -> GuideSummary {
    GuideSummary {
        id: id.to_string(),
        title: BilingualText::new(title.0, title.1),
        description: BilingualText::new(description.0, description.1),
        image_url: format!("./images/{id}.jpg"),
    }
}
