use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::models::{
    ExercisePrescription, Goal, GoalCategory, PlanOverview, Session, SplitTemplate, TrainingPlan,
    UserProfile, Week,
};

use super::exercise_catalog::{self, CARDIO_EXERCISES};

/// Sessions in every generated plan, whatever the weekly frequency
pub const TOTAL_SESSIONS: usize = 12;

const EXERCISES_PER_MUSCLE: usize = 2;
const MAX_MUSCLE_EXERCISES: usize = 6;
const CIRCUIT_EXERCISES: usize = 5;

const GUIDELINES: &[&str] = &[
    "Realize um aquecimento de 5-10 minutos antes das sessões",
    "Mantenha-se hidratado durante todo o treino",
    "Foque na execução correta dos movimentos",
];

const RECOVERY_TIPS: &[&str] = &[
    "Durma pelo menos 7-8 horas por noite",
    "Inclua alongamentos após os treinos",
    "Faça dias de descanso ativo conforme necessário",
];

const NUTRITION_TIPS: &[&str] = &[
    "Ajuste sua alimentação de acordo com o objetivo",
    "Inclua proteínas magras e carboidratos complexos",
    "Beba bastante água",
];

const PROGRESSION_STRATEGY: &str =
    "Aumente gradualmente a carga ou repetições a cada semana conforme se sentir confortável.";

/// Build the 12-session plan for a profile using the given random source.
///
/// Weeks hold `training_frequency` sessions except the last, which is cut
/// short once the plan reaches [`TOTAL_SESSIONS`]. The session counter runs
/// across week boundaries and picks the split template, so templates keep
/// cycling from one week into the next.
pub fn generate_plan<R: Rng + ?Sized>(profile: &UserProfile, rng: &mut R) -> TrainingPlan {
    let goal = profile.primary_goal();
    let frequency = profile.training_frequency() as usize;
    let weeks = TOTAL_SESSIONS.div_ceil(frequency);
    let splits = exercise_catalog::splits_for(goal);

    info!(
        "Generating {} plan: {} sessions/week over {} weeks",
        goal, frequency, weeks
    );

    let mut sessions_generated = 0;
    let mut training_weeks = Vec::with_capacity(weeks);

    for week_number in 1..=weeks {
        let mut sessions = Vec::with_capacity(frequency.min(TOTAL_SESSIONS));

        for day in 1..=frequency {
            if sessions_generated >= TOTAL_SESSIONS {
                break;
            }

            let split = &splits[sessions_generated % splits.len()];
            let exercises = pick_exercises(goal, split, rng);
            debug!(
                "Week {} day {}: {} with {} exercises",
                week_number,
                day,
                split.name,
                exercises.len()
            );

            sessions.push(build_session(goal, day as u32, split, exercises));
            sessions_generated += 1;
        }

        training_weeks.push(Week {
            week: week_number as u32,
            focus: format!("Semana de {}", goal),
            sessions,
        });

        if sessions_generated >= TOTAL_SESSIONS {
            break;
        }
    }

    TrainingPlan {
        overview: PlanOverview {
            primary_goal: goal,
            focus_points: vec![goal.label().to_string()],
            macrocycle_length_weeks: weeks as u32,
        },
        guidelines: to_strings(GUIDELINES),
        training_weeks,
        recovery: to_strings(RECOVERY_TIPS),
        nutrition_tips: to_strings(NUTRITION_TIPS),
        progression_strategy: Some(PROGRESSION_STRATEGY.to_string()),
    }
}

/// [`generate_plan`] backed by the thread-local generator
pub fn generate_plan_with_thread_rng(profile: &UserProfile) -> TrainingPlan {
    generate_plan(profile, &mut rand::thread_rng())
}

/// Choose the exercise names for one session
fn pick_exercises<R: Rng + ?Sized>(
    goal: Goal,
    split: &SplitTemplate,
    rng: &mut R,
) -> Vec<&'static str> {
    match goal.category() {
        GoalCategory::MuscleDriven => {
            let mut exercises = Vec::new();
            for muscle in split.muscles {
                let choices = exercise_catalog::exercises_for(*muscle);
                exercises.extend(choices.choose_multiple(rng, EXERCISES_PER_MUSCLE).copied());
            }
            exercises.shuffle(rng);
            exercises.truncate(MAX_MUSCLE_EXERCISES);
            exercises
        }
        GoalCategory::CircuitDriven => CARDIO_EXERCISES
            .choose_multiple(rng, CIRCUIT_EXERCISES)
            .copied()
            .collect(),
    }
}

fn build_session(goal: Goal, day: u32, split: &SplitTemplate, exercises: Vec<&str>) -> Session {
    let scheme = exercise_catalog::prescription_for(goal);

    Session {
        day,
        name: split.name.to_string(),
        focus: split.focus.to_string(),
        summary: None,
        exercises: exercises
            .into_iter()
            .map(|exercise| ExercisePrescription {
                exercise: exercise.to_string(),
                sets: scheme.sets,
                reps: scheme.reps.to_string(),
                rest: scheme.rest.to_string(),
                notes: None,
            })
            .collect(),
        conditioning: None,
        mobility: None,
        progression: None,
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
