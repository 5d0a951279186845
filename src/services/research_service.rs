use crate::models::{ResearchEntry, SearchResult, UserProfile};

/// The three web queries run alongside plan generation
pub fn research_queries(profile: &UserProfile) -> Vec<String> {
    let goal = profile.primary_goal().label();
    vec![
        format!(
            "treino de musculação {} {} dias por semana",
            goal,
            profile.training_frequency()
        ),
        format!("melhores exercícios para {} academia", goal),
        format!("estratégias de treino para {}", goal),
    ]
}

/// One line per query: `<query>: <first reference>` or the bare query.
///
/// Error sentinels count as "nothing found", same as an empty result list.
pub fn summarize_research(entries: &[ResearchEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry.results.first().and_then(reference_label) {
            Some(label) => format!("{}: {}", entry.query, label),
            None => entry.query.clone(),
        })
        .collect()
}

fn reference_label(result: &SearchResult) -> Option<&str> {
    if result.is_error() {
        return None;
    }
    [&result.title, &result.url, &result.snippet]
        .into_iter()
        .map(String::as_str)
        .find(|s| !s.is_empty())
}
