/// Filter decisions: which cards are visible for a search term or category

use crate::card::{CardRecord, Category};

/// The most recent filtering interaction. Search and category passes replace
/// each other; they are never combined.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPass {
    Search(String),
    Category(Category),
}

/// Case-insensitive substring match over title, description and tags
pub fn matches_term(card: &CardRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }

    card.title.to_lowercase().contains(&term)
        || card.description.to_lowercase().contains(&term)
        || card.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
}

/// Tag substring match against the category value (case-sensitive)
pub fn matches_category(card: &CardRecord, category: Category) -> bool {
    match category {
        Category::All => true,
        other => card.tags.iter().any(|tag| tag.contains(other.value())),
    }
}

/// Visibility for every card, in card order
pub fn visibility(cards: &[CardRecord], pass: &FilterPass) -> Vec<bool> {
    cards
        .iter()
        .map(|card| match pass {
            FilterPass::Search(term) => matches_term(card, term),
            FilterPass::Category(category) => matches_category(card, *category),
        })
        .collect()
}

pub fn visible_count(visible: &[bool]) -> usize {
    visible.iter().filter(|shown| **shown).count()
}

pub fn results_label(count: usize) -> String {
    format!("Showing {} AI tools", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<CardRecord> {
        vec![
            CardRecord::new("ChatGPT", "General purpose assistant", &["Conversational AI"]),
            CardRecord::new("Midjourney", "Art from prompts", &["Image Generation"]),
            CardRecord::new("GitHub Copilot", "Pair programmer", &["Coding", "Conversational AI"]),
            CardRecord::new("Jasper", "Marketing copy", &["Writing"]),
        ]
    }

    fn visible_titles(cards: &[CardRecord], pass: &FilterPass) -> Vec<String> {
        cards
            .iter()
            .zip(visibility(cards, pass))
            .filter(|(_, shown)| *shown)
            .map(|(card, _)| card.title.clone())
            .collect()
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let cards = directory();
        let titles = visible_titles(&cards, &FilterPass::Search("CHAT".to_string()));
        assert_eq!(titles, vec!["ChatGPT"]);
    }

    #[test]
    fn test_search_matches_description() {
        let cards = directory();
        let titles = visible_titles(&cards, &FilterPass::Search("prompts".to_string()));
        assert_eq!(titles, vec!["Midjourney"]);
    }

    #[test]
    fn test_search_matches_any_tag() {
        let cards = directory();
        let titles = visible_titles(&cards, &FilterPass::Search("conversational".to_string()));
        assert_eq!(titles, vec!["ChatGPT", "GitHub Copilot"]);
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let cards = directory();
        let visible = visibility(&cards, &FilterPass::Search(String::new()));
        assert_eq!(visible_count(&visible), cards.len());
    }

    #[test]
    fn test_search_without_match_hides_everything() {
        let cards = directory();
        let visible = visibility(&cards, &FilterPass::Search("zzz".to_string()));
        assert_eq!(visible_count(&visible), 0);
    }

    #[test]
    fn test_search_agrees_with_definition_for_many_terms() {
        let cards = directory();
        for term in ["a", "pro", "GEN", "ai", "copy", "t", "Copilot", "x"] {
            let visible = visibility(&cards, &FilterPass::Search(term.to_string()));
            for (card, shown) in cards.iter().zip(visible) {
                let needle = term.to_lowercase();
                let expected = card.title.to_lowercase().contains(&needle)
                    || card.description.to_lowercase().contains(&needle)
                    || card.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                assert_eq!(shown, expected, "term {:?} card {:?}", term, card.title);
            }
        }
    }

    #[test]
    fn test_category_all_shows_everything() {
        let cards = directory();
        let visible = visibility(&cards, &FilterPass::Category(Category::All));
        assert!(visible.iter().all(|shown| *shown));
    }

    #[test]
    fn test_category_matches_tag_substring() {
        let cards = vec![
            CardRecord::new("Claude", "Assistant", &["Conversational AI Assistant"]),
            CardRecord::new("Stable Diffusion", "Images", &["Image Generation"]),
        ];
        let titles = visible_titles(&cards, &FilterPass::Category(Category::Chat));
        assert_eq!(titles, vec!["Claude"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let cards = vec![CardRecord::new("Lower", "d", &["coding"])];
        let visible = visibility(&cards, &FilterPass::Category(Category::Code));
        assert_eq!(visible, vec![false]);
    }

    #[test]
    fn test_each_category_matches_its_cards() {
        let cards = directory();
        assert_eq!(
            visible_titles(&cards, &FilterPass::Category(Category::Chat)),
            vec!["ChatGPT", "GitHub Copilot"]
        );
        assert_eq!(
            visible_titles(&cards, &FilterPass::Category(Category::Images)),
            vec!["Midjourney"]
        );
        assert_eq!(
            visible_titles(&cards, &FilterPass::Category(Category::Code)),
            vec!["GitHub Copilot"]
        );
        assert_eq!(
            visible_titles(&cards, &FilterPass::Category(Category::Writing)),
            vec!["Jasper"]
        );
    }

    #[test]
    fn test_category_pass_ignores_previous_search() {
        // Passes replace each other: a category click after searching "chat"
        // does not keep the search term applied.
        let cards = directory();
        let after_search = visible_titles(&cards, &FilterPass::Search("chat".to_string()));
        assert_eq!(after_search, vec!["ChatGPT"]);

        let after_category = visible_titles(&cards, &FilterPass::Category(Category::Images));
        assert_eq!(after_category, vec!["Midjourney"]);
    }

    #[test]
    fn test_search_pass_ignores_previous_category() {
        let cards = directory();
        let titles = visible_titles(&cards, &FilterPass::Search("jasper".to_string()));
        assert_eq!(titles, vec!["Jasper"]);
    }

    #[test]
    fn test_scenario_chat_then_images() {
        let cards = vec![
            CardRecord::new("ChatGPT", "", &["Conversational AI"]),
            CardRecord::new("Midjourney", "", &["Image Generation"]),
        ];

        let visible = visibility(&cards, &FilterPass::Search("chat".to_string()));
        assert_eq!(visible, vec![true, false]);
        assert_eq!(results_label(visible_count(&visible)), "Showing 1 AI tools");

        let visible = visibility(&cards, &FilterPass::Category(Category::Images));
        assert_eq!(visible, vec![false, true]);

        let visible = visibility(&cards, &FilterPass::Search(String::new()));
        assert_eq!(visible, vec![true, true]);
    }
}
