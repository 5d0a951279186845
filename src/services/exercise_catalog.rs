use crate::models::{Goal, MuscleGroup, SplitTemplate};

use MuscleGroup::*;

const CHEST: &[&str] = &[
    "Supino reto com barra",
    "Supino inclinado com halteres",
    "Crucifixo na máquina",
    "Peck deck",
    "Flexões",
];

const TRICEPS: &[&str] = &[
    "Tríceps pulley",
    "Tríceps testa",
    "Mergulho banco",
    "Tríceps corda",
    "Kickback",
];

const BACK: &[&str] = &[
    "Puxada frontal",
    "Remada curvada com barra",
    "Remada unilateral com haltere",
    "Pulldown",
    "Levantamento terra",
];

const BICEPS: &[&str] = &[
    "Rosca direta com barra",
    "Rosca alternada",
    "Rosca martelo",
    "Rosca concentrada",
    "Rosca Scott",
];

const LEGS: &[&str] = &[
    "Agachamento livre",
    "Leg press",
    "Cadeira extensora",
    "Cadeira flexora",
    "Afundo com halteres",
    "Panturrilha em pé",
];

const SHOULDERS: &[&str] = &[
    "Desenvolvimento com barra",
    "Desenvolvimento com halteres",
    "Elevação lateral",
    "Elevação frontal",
    "Remada alta",
];

const GLUTES: &[&str] = &[
    "Agachamento sumô",
    "Peso morto stiff",
    "Glute bridge",
    "Cadeira abdutora",
    "Elevação de quadril",
];

const ABS: &[&str] = &[
    "Prancha",
    "Abdominal supra",
    "Elevação de pernas",
    "Abdominal oblíquo",
    "Prancha lateral",
];

/// Cardio and functional movements shared by the circuit goals
pub const CARDIO_EXERCISES: &[&str] = &[
    "Burpees",
    "Mountain climbers",
    "Agachamento com salto",
    "Polichinelos",
    "Corrida estacionária",
    "Pular corda",
    "Kettlebell swing",
    "Clean and press com halteres leves",
    "Flexões",
    "Abdominal bicicleta",
];

const HYPERTROPHY_SPLITS: &[SplitTemplate] = &[
    SplitTemplate {
        name: "Treino A - Peito e Tríceps",
        muscles: &[Chest, Triceps],
        focus: "Peito e Tríceps",
    },
    SplitTemplate {
        name: "Treino B - Costas e Bíceps",
        muscles: &[Back, Biceps],
        focus: "Costas e Bíceps",
    },
    SplitTemplate {
        name: "Treino C - Pernas e Ombros",
        muscles: &[Legs, Shoulders],
        focus: "Pernas e Ombros",
    },
    SplitTemplate {
        name: "Treino D - Peito e Costas",
        muscles: &[Chest, Back],
        focus: "Peito e Costas",
    },
    SplitTemplate {
        name: "Treino E - Pernas e Glúteos",
        muscles: &[Legs, Glutes],
        focus: "Pernas e Glúteos",
    },
    SplitTemplate {
        name: "Treino F - Ombros e Braços",
        muscles: &[Shoulders, Biceps, Triceps],
        focus: "Ombros e Braços",
    },
];

const STRENGTH_SPLITS: &[SplitTemplate] = &[
    SplitTemplate {
        name: "Treino A - Agachamento",
        muscles: &[Legs, Glutes, Back],
        focus: "Força em Agachamento",
    },
    SplitTemplate {
        name: "Treino B - Supino e Press",
        muscles: &[Chest, Shoulders, Triceps],
        focus: "Força em Supino",
    },
    SplitTemplate {
        name: "Treino C - Deadlift",
        muscles: &[Legs, Back],
        focus: "Força em Deadlift",
    },
    SplitTemplate {
        name: "Treino D - Full Body",
        muscles: &[Legs, Back, Chest, Shoulders],
        focus: "Força Total",
    },
];

const CONDITIONING_SPLITS: &[SplitTemplate] = &[
    SplitTemplate {
        name: "Circuito HIIT",
        muscles: &[],
        focus: "Alta intensidade",
    },
    SplitTemplate {
        name: "Circuito de Resistência",
        muscles: &[],
        focus: "Resistência Muscular",
    },
    SplitTemplate {
        name: "Circuito Cardio e Força",
        muscles: &[],
        focus: "Cardio e Força",
    },
    SplitTemplate {
        name: "Circuito Funcional",
        muscles: &[],
        focus: "Funcional",
    },
];

const FAT_LOSS_SPLITS: &[SplitTemplate] = &[
    SplitTemplate {
        name: "Circuito A",
        muscles: &[],
        focus: "Circuito",
    },
    SplitTemplate {
        name: "Circuito B",
        muscles: &[],
        focus: "Circuito",
    },
    SplitTemplate {
        name: "Circuito C",
        muscles: &[],
        focus: "Circuito",
    },
    SplitTemplate {
        name: "Circuito D",
        muscles: &[],
        focus: "Circuito",
    },
];

/// Sets, reps and rest applied to every exercise of a goal's sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrescriptionScheme {
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
}

pub fn exercises_for(muscle: MuscleGroup) -> &'static [&'static str] {
    match muscle {
        Chest => CHEST,
        Triceps => TRICEPS,
        Back => BACK,
        Biceps => BICEPS,
        Legs => LEGS,
        Shoulders => SHOULDERS,
        Glutes => GLUTES,
        Abs => ABS,
    }
}

/// Split templates of a goal, in cycling order
pub fn splits_for(goal: Goal) -> &'static [SplitTemplate] {
    match goal {
        Goal::Hypertrophy => HYPERTROPHY_SPLITS,
        Goal::Strength => STRENGTH_SPLITS,
        Goal::Conditioning => CONDITIONING_SPLITS,
        Goal::FatLoss => FAT_LOSS_SPLITS,
    }
}

pub fn prescription_for(goal: Goal) -> PrescriptionScheme {
    match goal {
        Goal::Hypertrophy => PrescriptionScheme {
            sets: 4,
            reps: "8-12",
            rest: "60-90s",
        },
        Goal::Strength => PrescriptionScheme {
            sets: 4,
            reps: "4-6",
            rest: "2-3min",
        },
        Goal::FatLoss => PrescriptionScheme {
            sets: 3,
            reps: "12-15",
            rest: "30s",
        },
        Goal::Conditioning => PrescriptionScheme {
            sets: 3,
            reps: "10-15",
            rest: "30-60s",
        },
    }
}

/// Every exercise a session built from `split` may contain.
///
/// Circuit splits have no muscle targets and draw from the cardio list.
pub fn exercise_pool(split: &SplitTemplate) -> Vec<&'static str> {
    if split.muscles.is_empty() {
        return CARDIO_EXERCISES.to_vec();
    }
    split
        .muscles
        .iter()
        .flat_map(|m| exercises_for(*m).iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalCategory;

    #[test]
    fn test_split_counts_per_goal() {
        assert_eq!(splits_for(Goal::Hypertrophy).len(), 6);
        assert_eq!(splits_for(Goal::Strength).len(), 4);
        assert_eq!(splits_for(Goal::Conditioning).len(), 4);
        assert_eq!(splits_for(Goal::FatLoss).len(), 4);
    }

    #[test]
    fn test_muscle_targets_match_goal_category() {
        for goal in Goal::ALL {
            let has_targets = splits_for(goal).iter().all(|s| !s.muscles.is_empty());
            let no_targets = splits_for(goal).iter().all(|s| s.muscles.is_empty());
            match goal.category() {
                GoalCategory::MuscleDriven => assert!(has_targets, "{goal} splits need targets"),
                GoalCategory::CircuitDriven => assert!(no_targets, "{goal} splits are circuits"),
            }
        }
    }

    #[test]
    fn test_every_muscle_group_has_enough_exercises() {
        for muscle in [Chest, Triceps, Back, Biceps, Legs, Shoulders, Glutes, Abs] {
            assert!(exercises_for(muscle).len() >= 2, "{muscle:?} needs two exercises");
        }
        assert!(CARDIO_EXERCISES.len() >= 5);
    }

    #[test]
    fn test_exercise_pool() {
        let push = &splits_for(Goal::Hypertrophy)[0];
        let pool = exercise_pool(push);
        assert_eq!(pool.len(), CHEST.len() + TRICEPS.len());
        assert!(pool.contains(&"Peck deck"));
        assert!(pool.contains(&"Kickback"));

        let circuit = &splits_for(Goal::FatLoss)[0];
        assert_eq!(exercise_pool(circuit), CARDIO_EXERCISES.to_vec());
    }

    #[test]
    fn test_prescriptions() {
        assert_eq!(
            prescription_for(Goal::Strength),
            PrescriptionScheme {
                sets: 4,
                reps: "4-6",
                rest: "2-3min"
            }
        );
        assert_eq!(prescription_for(Goal::FatLoss).rest, "30s");
        assert_eq!(prescription_for(Goal::Conditioning).reps, "10-15");
        assert_eq!(prescription_for(Goal::Hypertrophy).sets, 4);
    }
}
