use anyhow::Result;
use clap::Args;
use dialoguer::{Input, Select};
use fitness_coach::models::{ExperienceLevel, Goal, ProfileInput};

use crate::config::ProfileDefaults;

/// Profile fields shared by `plan` and `metrics`
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Body weight in kg
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm (e.g. 175 or 175,5)
    #[arg(long)]
    pub height: Option<String>,

    /// Training sessions per week
    #[arg(short, long)]
    pub frequency: Option<u32>,

    /// Primary goal (hipertrofia, emagrecimento, força, condicionamento)
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Experience level (iniciante, intermediário, avançado)
    #[arg(short, long)]
    pub experience: Option<String>,

    /// Injuries or movement restrictions
    #[arg(long)]
    pub restrictions: Option<String>,

    /// Free-form notes for the coach
    #[arg(long)]
    pub notes: Option<String>,

    /// Prompt for every field not given on the command line
    #[arg(short, long)]
    pub interactive: bool,
}

impl ProfileArgs {
    /// Merge flags, prompts and configured defaults into a raw profile
    pub fn resolve(self, defaults: &ProfileDefaults) -> Result<ProfileInput> {
        if self.interactive {
            return self.prompt(defaults);
        }

        Ok(ProfileInput {
            age: self.age.unwrap_or(defaults.age),
            weight_kg: self.weight.unwrap_or(defaults.weight_kg),
            height: self.height,
            training_frequency: self.frequency.unwrap_or(defaults.training_frequency),
            goal: self.goal.unwrap_or_else(|| defaults.goal.clone()),
            experience_level: self
                .experience
                .unwrap_or_else(|| defaults.experience_level.clone()),
            restrictions: self.restrictions,
            notes: self.notes,
        })
    }

    fn prompt(self, defaults: &ProfileDefaults) -> Result<ProfileInput> {
        println!("Perfil do atleta");
        println!();

        let age = match self.age {
            Some(age) => age,
            None => Input::new()
                .with_prompt("Idade")
                .default(defaults.age)
                .interact_text()?,
        };

        let weight_kg = match self.weight {
            Some(weight) => weight,
            None => Input::new()
                .with_prompt("Peso (kg)")
                .default(defaults.weight_kg)
                .interact_text()?,
        };

        let height = match self.height {
            Some(height) => Some(height),
            None => {
                let raw: String = Input::new()
                    .with_prompt("Altura (cm, opcional)")
                    .allow_empty(true)
                    .interact_text()?;
                Some(raw)
            }
        };

        let training_frequency = match self.frequency {
            Some(frequency) => frequency,
            None => Input::new()
                .with_prompt("Treinos por semana")
                .default(defaults.training_frequency)
                .interact_text()?,
        };

        let goal = match self.goal {
            Some(goal) => goal,
            None => {
                let labels: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();
                let default = Goal::ALL
                    .iter()
                    .position(|g| *g == Goal::normalize(&defaults.goal))
                    .unwrap_or(0);
                let index = Select::new()
                    .with_prompt("Objetivo")
                    .items(&labels)
                    .default(default)
                    .interact()?;
                labels[index].to_string()
            }
        };

        let experience_level = match self.experience {
            Some(experience) => experience,
            None => {
                let labels: Vec<&str> = ExperienceLevel::ALL.iter().map(|l| l.label()).collect();
                let default = ExperienceLevel::ALL
                    .iter()
                    .position(|l| *l == ExperienceLevel::normalize(&defaults.experience_level))
                    .unwrap_or(0);
                let index = Select::new()
                    .with_prompt("Nível de experiência")
                    .items(&labels)
                    .default(default)
                    .interact()?;
                labels[index].to_string()
            }
        };

        let restrictions = match self.restrictions {
            Some(restrictions) => Some(restrictions),
            None => Some(
                Input::<String>::new()
                    .with_prompt("Restrições (opcional)")
                    .allow_empty(true)
                    .interact_text()?,
            ),
        };

        let notes = match self.notes {
            Some(notes) => Some(notes),
            None => Some(
                Input::<String>::new()
                    .with_prompt("Observações (opcional)")
                    .allow_empty(true)
                    .interact_text()?,
            ),
        };

        println!();

        Ok(ProfileInput {
            age,
            weight_kg,
            height,
            training_frequency,
            goal,
            experience_level,
            restrictions,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_fall_back_to_defaults() {
        let input = ProfileArgs::default()
            .resolve(&ProfileDefaults::default())
            .unwrap();

        assert_eq!(input.age, 25);
        assert_eq!(input.weight_kg, 75.0);
        assert_eq!(input.training_frequency, 4);
        assert_eq!(input.goal, "hipertrofia");
        assert_eq!(input.experience_level, "iniciante");
        assert!(input.height.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = ProfileArgs {
            weight: Some(80.0),
            height: Some("180".to_string()),
            frequency: Some(5),
            goal: Some("strength".to_string()),
            ..Default::default()
        };

        let input = args.resolve(&ProfileDefaults::default()).unwrap();
        assert_eq!(input.weight_kg, 80.0);
        assert_eq!(input.height.as_deref(), Some("180"));
        assert_eq!(input.training_frequency, 5);
        assert_eq!(input.goal, "strength");
    }
}
