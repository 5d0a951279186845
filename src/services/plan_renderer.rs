use crate::models::{AnalyticsRecord, ExercisePrescription, Session, TrainingPlan, UserProfile};

/// Render the full plan as sectioned text; empty sections are left out
pub fn render_plan(plan: &TrainingPlan) -> String {
    let mut lines: Vec<String> = Vec::new();

    let overview = &plan.overview;
    lines.push("## Visão geral".to_string());
    lines.push(format!("- **Objetivo principal:** {}", overview.primary_goal));
    if !overview.focus_points.is_empty() {
        lines.push(format!(
            "- **Pontos de foco:** {}",
            overview.focus_points.join(", ")
        ));
    }
    if overview.macrocycle_length_weeks > 0 {
        lines.push(format!(
            "- **Duração do macrociclo:** {} semanas",
            overview.macrocycle_length_weeks
        ));
    }
    lines.push(String::new());

    push_bullet_section(&mut lines, "## Diretrizes", &plan.guidelines);

    if !plan.training_weeks.is_empty() {
        lines.push("## Semanas de treino".to_string());
        for week in &plan.training_weeks {
            let mut header = format!("### Semana {}", week.week);
            if !week.focus.is_empty() {
                header.push_str(&format!(": {}", week.focus));
            }
            lines.push(header);

            for (index, session) in week.sessions.iter().enumerate() {
                render_session(&mut lines, index + 1, session);
            }
        }
        lines.push(String::new());
    }

    push_bullet_section(&mut lines, "## Recuperação", &plan.recovery);
    push_bullet_section(&mut lines, "## Dicas de nutrição", &plan.nutrition_tips);

    if let Some(strategy) = plan.progression_strategy.as_deref().filter(|s| !s.is_empty()) {
        lines.push("## Estratégia de progressão".to_string());
        lines.push(strategy.to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_session(lines: &mut Vec<String>, position: usize, session: &Session) {
    let mut header = if session.name.is_empty() {
        format!("#### Sessão {}", position)
    } else {
        format!("#### {}", session.name)
    };
    if !session.focus.is_empty() {
        header.push_str(&format!(" – {}", session.focus));
    }
    lines.push(header);

    if let Some(summary) = non_empty(&session.summary) {
        lines.push(summary.to_string());
    }

    if !session.exercises.is_empty() {
        lines.push("##### Exercícios".to_string());
        lines.extend(session.exercises.iter().map(exercise_line));
    }

    if let Some(conditioning) = non_empty(&session.conditioning) {
        lines.push(format!("- **Condicionamento:** {}", conditioning));
    }
    if let Some(mobility) = non_empty(&session.mobility) {
        lines.push(format!("- **Mobilidade:** {}", mobility));
    }
    if let Some(progression) = non_empty(&session.progression) {
        lines.push(format!("- **Progressão:** {}", progression));
    }
    lines.push(String::new());
}

/// `- <exercise> <sets>x <reps> descanso <rest>` with an optional trailing note
fn exercise_line(exercise: &ExercisePrescription) -> String {
    let mut parts = vec![format!("{}x", exercise.sets)];
    if !exercise.reps.is_empty() {
        parts.push(exercise.reps.clone());
    }
    if !exercise.rest.is_empty() {
        parts.push(format!("descanso {}", exercise.rest));
    }

    let mut line = format!("- {} {}", exercise.exercise, parts.join(" "));
    if let Some(notes) = non_empty(&exercise.notes) {
        line.push_str(&format!(" – {}", notes));
    }
    line
}

fn push_bullet_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(title.to_string());
    lines.extend(items.iter().map(|item| format!("- {}", item)));
    lines.push(String::new());
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Bullet list of the derived metrics; the BMI line only appears with a height
pub fn render_analytics(record: &AnalyticsRecord) -> String {
    let mut lines = vec![
        format!(
            "- Calorias estimadas por sessão: {:.1} kcal",
            record.estimated_session_calories
        ),
        format!(
            "- Calorias semanais aproximadas: {:.1} kcal",
            record.estimated_weekly_calories
        ),
        format!("- Faixa de repetições sugerida: {}", record.recommended_rep_range),
        format!("- Intensidade sugerida: {}", record.recommended_intensity),
        format!("- Volume por sessão: {}", record.volume_per_session),
    ];
    if let Some(bmi) = record.bmi {
        lines.push(format!("- IMC aproximado: {:.2}", bmi));
    }
    lines.join("\n")
}

/// Bullet list echoing the validated profile
pub fn render_profile(profile: &UserProfile) -> String {
    let mut lines = vec![
        format!("- **Idade:** {} anos", profile.age()),
        format!("- **Peso:** {:.1} kg", profile.weight_kg()),
    ];
    if let Some(height) = profile.height_cm() {
        lines.push(format!("- **Altura:** {:.1} cm", height));
    }
    lines.push(format!(
        "- **Frequência semanal:** {} dias",
        profile.training_frequency()
    ));
    lines.push(format!("- **Objetivo:** {}", profile.primary_goal()));
    lines.push(format!("- **Nível:** {}", profile.experience_level()));
    if let Some(restrictions) = profile.restrictions() {
        lines.push(format!("- **Restrições:** {}", restrictions));
    }
    if let Some(notes) = profile.additional_notes() {
        lines.push(format!("- **Observações:** {}", notes));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, Goal, PlanOverview, Week};
    use crate::services::metrics_service::calculate_metrics;
    use pretty_assertions::assert_eq;

    fn prescription(name: &str, notes: Option<&str>) -> ExercisePrescription {
        ExercisePrescription {
            exercise: name.to_string(),
            sets: 4,
            reps: "8-12".to_string(),
            rest: "60-90s".to_string(),
            notes: notes.map(str::to_string),
        }
    }

    fn session(name: &str, exercises: Vec<ExercisePrescription>) -> Session {
        Session {
            day: 1,
            name: name.to_string(),
            focus: "Peito e Tríceps".to_string(),
            summary: None,
            exercises,
            conditioning: None,
            mobility: None,
            progression: None,
        }
    }

    fn minimal_plan() -> TrainingPlan {
        TrainingPlan {
            overview: PlanOverview {
                primary_goal: Goal::Hypertrophy,
                focus_points: vec!["hipertrofia".to_string()],
                macrocycle_length_weeks: 1,
            },
            guidelines: vec!["Aqueça bem".to_string()],
            training_weeks: vec![Week {
                week: 1,
                focus: "Semana de hipertrofia".to_string(),
                sessions: vec![session(
                    "Treino A - Peito e Tríceps",
                    vec![
                        prescription("Peck deck", None),
                        prescription("Tríceps corda", Some("cadência lenta")),
                    ],
                )],
            }],
            recovery: vec![],
            nutrition_tips: vec!["Beba bastante água".to_string()],
            progression_strategy: None,
        }
    }

    #[test]
    fn test_render_plan_layout() {
        let expected = "\
## Visão geral
- **Objetivo principal:** hipertrofia
- **Pontos de foco:** hipertrofia
- **Duração do macrociclo:** 1 semanas

## Diretrizes
- Aqueça bem

## Semanas de treino
### Semana 1: Semana de hipertrofia
#### Treino A - Peito e Tríceps – Peito e Tríceps
##### Exercícios
- Peck deck 4x 8-12 descanso 60-90s
- Tríceps corda 4x 8-12 descanso 60-90s – cadência lenta


## Dicas de nutrição
- Beba bastante água
";

        assert_eq!(render_plan(&minimal_plan()), expected);
    }

    #[test]
    fn test_render_session_optional_lines() {
        let mut plan = minimal_plan();
        {
            let session = &mut plan.training_weeks[0].sessions[0];
            session.name.clear();
            session.summary = Some("Foco em técnica".to_string());
            session.conditioning = Some("10 min de bike".to_string());
            session.mobility = Some(String::new());
            session.progression = Some("+2 kg".to_string());
        }
        plan.progression_strategy = Some("Progrida devagar".to_string());

        let text = render_plan(&plan);

        assert!(text.contains("#### Sessão 1 – Peito e Tríceps\nFoco em técnica\n"));
        assert!(text.contains("- **Condicionamento:** 10 min de bike"));
        assert!(!text.contains("Mobilidade"));
        assert!(text.contains("- **Progressão:** +2 kg"));
        assert!(text.ends_with("## Estratégia de progressão\nProgrida devagar\n"));
        assert!(!text.contains("## Recuperação"));
    }

    #[test]
    fn test_render_analytics_bmi_line() {
        let base = UserProfile::new(25, 75.0, 4, Goal::Hypertrophy, ExperienceLevel::Beginner).unwrap();

        let without_height = render_analytics(&calculate_metrics(&base));
        assert!(!without_height.contains("IMC"));

        let with_height = render_analytics(&calculate_metrics(&base.with_height(175.0).unwrap()));
        assert_eq!(
            with_height,
            "\
- Calorias estimadas por sessão: 540.0 kcal
- Calorias semanais aproximadas: 2160.0 kcal
- Faixa de repetições sugerida: 6-12
- Intensidade sugerida: 70-80% 1RM
- Volume por sessão: 14-18 séries por grupamento
- IMC aproximado: 24.49"
        );
    }

    #[test]
    fn test_render_profile() {
        let profile = UserProfile::new(31, 82.5, 3, Goal::Strength, ExperienceLevel::Advanced)
            .unwrap()
            .with_restrictions(Some("dor no ombro".to_string()));

        assert_eq!(
            render_profile(&profile),
            "\
- **Idade:** 31 anos
- **Peso:** 82.5 kg
- **Frequência semanal:** 3 dias
- **Objetivo:** força
- **Nível:** avançado
- **Restrições:** dor no ombro"
        );
    }
}
