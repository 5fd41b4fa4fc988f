//! Built-in sample decks for the review window.

pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    fn new(front: &str, back: &str) -> Self {
        Self {
            front: front.to_string(),
            back: back.to_string(),
        }
    }
}

pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
}

pub fn builtin_decks() -> Vec<Deck> {
    vec![
        Deck {
            name: "World Capitals".to_string(),
            cards: vec![
                Card::new("Capital of France?", "Paris"),
                Card::new("Capital of Japan?", "Tokyo"),
                Card::new("Capital of Canada?", "Ottawa"),
                Card::new("Capital of Australia?", "Canberra"),
            ],
        },
        Deck {
            name: "Spanish Basics".to_string(),
            cards: vec![
                Card::new("hello", "hola"),
                Card::new("thank you", "gracias"),
                Card::new("tomorrow", "mañana"),
            ],
        },
    ]
}
