//! Contact generation with demographics.

use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::Fake;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use contacts::models::Gender;

/// Generated contact data ready for insertion into the store.
#[derive(Debug, Clone)]
pub struct GeneratedContact {
    pub first_name: String,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<Gender>,
    pub is_starred: bool,
    pub food_preferences: Option<String>,
}

/// Generated first-met context for a contact.
#[derive(Debug, Clone)]
pub struct GeneratedFirstMet {
    pub location: Option<String>,
    pub additional_info: Option<String>,
}

/// Configuration for contact generation.
#[derive(Debug, Clone)]
pub struct ContactGenConfig {
    /// Probability that the last name is known.
    pub last_name_probability: f64,
    /// Probability that a nickname is recorded.
    pub nickname_probability: f64,
    /// Distribution of genders (male, female, other).
    pub gender_distribution: [f64; 3],
    /// Probability that a contact is starred.
    pub starred_probability: f64,
    /// Probability that food preferences are recorded.
    pub food_preferences_probability: f64,
    /// Mean approximate age, for birthdates derived from age.
    pub age_mean: f64,
    /// Standard deviation of the approximate age.
    pub age_std: f64,
}

impl Default for ContactGenConfig {
    fn default() -> Self {
        Self {
            last_name_probability: 0.5,
            nickname_probability: 0.5,
            gender_distribution: [0.48, 0.48, 0.04],
            starred_probability: 0.2,
            food_preferences_probability: 0.5,
            age_mean: 40.0,
            age_std: 18.0,
        }
    }
}

/// Generates realistic contact data.
pub struct ContactGenerator {
    config: ContactGenConfig,
}

impl ContactGenerator {
    /// Creates a new contact generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ContactGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ContactGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single contact.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedContact {
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name = if rng.r#gen::<f64>() < self.config.last_name_probability {
            Some(LastName().fake_with_rng(rng))
        } else {
            None
        };
        let nickname = if rng.r#gen::<f64>() < self.config.nickname_probability {
            Some(Name().fake_with_rng(rng))
        } else {
            None
        };
        let food_preferences = if rng.r#gen::<f64>() < self.config.food_preferences_probability {
            Some(Sentence(4..10).fake_with_rng(rng))
        } else {
            None
        };

        GeneratedContact {
            first_name,
            last_name,
            nickname,
            gender: Some(self.generate_gender(rng)),
            is_starred: rng.r#gen::<f64>() < self.config.starred_probability,
            food_preferences,
        }
    }

    /// Generates multiple contacts.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedContact> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generates the first-met context (where and how we met).
    pub fn generate_first_met(&self, rng: &mut impl Rng) -> GeneratedFirstMet {
        let location = if rng.r#gen::<f64>() < 0.5 {
            Some(Sentence(2..5).fake_with_rng(rng))
        } else {
            None
        };
        let additional_info = if rng.r#gen::<f64>() < 0.5 {
            Some(Sentence(3..8).fake_with_rng(rng))
        } else {
            None
        };
        GeneratedFirstMet {
            location,
            additional_info,
        }
    }

    /// Samples an approximate age for age-derived birthdates.
    pub fn random_age(&self, rng: &mut impl Rng) -> u32 {
        let normal = Normal::new(self.config.age_mean, self.config.age_std)
            .expect("age distribution parameters are valid");
        let age = normal.sample(rng) as i64;
        age.clamp(10, 100) as u32
    }

    /// Samples a gender based on the configured distribution.
    fn generate_gender(&self, rng: &mut impl Rng) -> Gender {
        let roll: f64 = rng.r#gen();
        let mut cumulative = 0.0;

        for (i, &weight) in self.config.gender_distribution.iter().enumerate() {
            cumulative += weight;
            if roll < cumulative {
                return match i {
                    0 => Gender::Male,
                    1 => Gender::Female,
                    _ => Gender::Other,
                };
            }
        }

        Gender::Other
    }
}

impl Default for ContactGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_contact() {
        let contact_gen = ContactGenerator::new();
        let mut rng = rand::thread_rng();
        let contact = contact_gen.generate(&mut rng);

        assert!(!contact.first_name.is_empty());
        assert!(contact.gender.is_some());
    }

    #[test]
    fn test_generate_batch() {
        let contact_gen = ContactGenerator::new();
        let mut rng = rand::thread_rng();
        let contacts = contact_gen.generate_batch(10, &mut rng);
        assert_eq!(contacts.len(), 10);
    }

    #[test]
    fn test_random_age_is_clamped() {
        let contact_gen = ContactGenerator::with_config(ContactGenConfig {
            age_mean: 40.0,
            age_std: 100.0,
            ..ContactGenConfig::default()
        });
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let age = contact_gen.random_age(&mut rng);
            assert!((10..=100).contains(&age));
        }
    }
}
