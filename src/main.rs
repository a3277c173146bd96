use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use pet_shelter::{Cat, CatTraits, Dog, DogTraits, Shelter, ShelterAnimal, ShelterConfig};

fn main() -> Result<()> {
    let config = ShelterConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter: {}", config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut shelter = build_shelter(&config);

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("care") => shelter.perform_daily_care_all(),
        Some("report") => println!("{}", shelter.report().to_json()?),
        Some("adopt") => run_adoption_demo(&mut shelter),
        _ => {
            println!("🏠 {} (v{})", shelter.name(), pet_shelter::VERSION);
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            shelter.display_all_profiles();
        }
    }

    Ok(())
}

fn build_shelter(config: &ShelterConfig) -> Shelter {
    let mut shelter = Shelter::with_config(config);

    shelter.add(Dog::with_traits(
        "Buddy",
        3,
        "Labrador",
        "2025-07-01",
        DogTraits {
            trained: true,
            temperament: "Playful".to_string(),
            good_with_kids: true,
            good_with_other_dogs: true,
        },
    ));
    shelter.add(Cat::with_traits(
        "Whiskers",
        2,
        "Siamese",
        "2025-07-15",
        CatTraits {
            indoor: true,
            temperament: "Calm".to_string(),
            good_with_kids: true,
            good_with_other_cats: true,
            ..CatTraits::default()
        },
    ));

    shelter
}

fn run_adoption_demo(shelter: &mut Shelter) {
    for listing in shelter.adoption_listings() {
        println!("📋 {}", listing);
    }

    if let Some(buddy) = shelter.find_by_name_mut("Buddy") {
        let score = buddy.compatibility_score(true, false, true);
        println!("\n🏡 Household fit for {}: {}/100", buddy.name(), score);

        if let Some(dog) = buddy.as_dog() {
            println!("{}", dog.fetch());
        }
        buddy.record_mut().adopt();
    }

    println!();
    for listing in shelter.adoption_listings() {
        println!("📋 {}", listing);
    }
}
