// src/bin/populate.rs
// DOCUMENTATION: Reference data loader
// PURPOSE: Fill the catalogue with brands, cars and photos from a JSON fixture
//
// Usage: populate fixtures/sample.json
// The database is taken from DATABASE_URL (same as the server).

use anyhow::{bail, Context};
use dealership::config::{self, Config};
use dealership::db::{BrandRepository, CarRepository, PhotoRepository};
use dealership::models::{CreateBrandRequest, CreateCarRequest, CreatePhotoRequest};
use dotenv::dotenv;
use serde::Deserialize;
use sqlx::SqlitePool;
use std::env;
use std::process;
use std::time::Instant;
use validator::Validate;

// --- ANSI colours for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// --- Fixture format ---

#[derive(Debug, Deserialize)]
struct Fixture {
    brands: Vec<FixtureBrand>,
}

#[derive(Debug, Deserialize)]
struct FixtureBrand {
    name: String,
    logo: String,
    country: String,
    #[serde(default)]
    cars: Vec<FixtureCar>,
}

#[derive(Debug, Deserialize)]
struct FixtureCar {
    car_model: String,
    body_type: String,
    year: i64,
    equipment_name: String,
    #[serde(default)]
    equipment_description: String,
    transmission: String,
    number_of_gears: i64,
    drive_unit: String,
    engine_type: String,
    working_volume: i64,
    engine_power: i64,
    price: i64,
    amount: i64,
    #[serde(default)]
    photos: Vec<String>,
}

impl FixtureCar {
    fn to_request(&self, brand_id: i64) -> CreateCarRequest {
        CreateCarRequest {
            brand_id,
            car_model: self.car_model.clone(),
            body_type: self.body_type.clone(),
            year: self.year,
            equipment_name: self.equipment_name.clone(),
            equipment_description: self.equipment_description.clone(),
            transmission: self.transmission.clone(),
            number_of_gears: self.number_of_gears,
            drive_unit: self.drive_unit.clone(),
            engine_type: self.engine_type.clone(),
            working_volume: self.working_volume,
            engine_power: self.engine_power,
            price: self.price,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Default)]
struct LoadSummary {
    brands_created: u32,
    brands_skipped: u32,
    cars_created: u32,
    cars_invalid: u32,
    photos_created: u32,
    problems: Vec<String>,
}

struct Populator {
    pool: SqlitePool,
    summary: LoadSummary,
}

impl Populator {
    async fn load(&mut self, fixture: &Fixture) -> anyhow::Result<()> {
        let total = fixture.brands.len();

        for (i, brand) in fixture.brands.iter().enumerate() {
            println!("{}[{}/{}] {}...{}", CYAN, i + 1, total, brand.name, RESET);
            self.load_brand(brand).await?;
        }

        Ok(())
    }

    async fn load_brand(&mut self, fixture: &FixtureBrand) -> anyhow::Result<()> {
        if BrandRepository::find_by_name(&self.pool, &fixture.name)
            .await?
            .is_some()
        {
            println!("{}  already loaded, skipped{}", YELLOW, RESET);
            self.summary.brands_skipped += 1;
            return Ok(());
        }

        let request = CreateBrandRequest {
            name: fixture.name.clone(),
            logo: fixture.logo.clone(),
            country: fixture.country.clone(),
        };
        if let Err(e) = request.validate() {
            self.report(format!("brand '{}': {}", fixture.name, e));
            self.summary.brands_skipped += 1;
            return Ok(());
        }

        let brand = BrandRepository::create_brand(&self.pool, &request).await?;
        self.summary.brands_created += 1;

        for car in &fixture.cars {
            let request = car.to_request(brand.id);
            if let Err(e) = request.validate() {
                self.report(format!("car '{} {}': {}", brand.name, car.car_model, e));
                self.summary.cars_invalid += 1;
                continue;
            }

            let created = CarRepository::create_car(&self.pool, &request).await?;
            self.summary.cars_created += 1;

            for path in &car.photos {
                let photo = CreatePhotoRequest {
                    car_id: created.id,
                    photo: path.clone(),
                };
                if photo.validate().is_err() {
                    self.report(format!("empty photo path for '{}'", created.display_name()));
                    continue;
                }
                PhotoRepository::create_photo(&self.pool, &photo).await?;
                self.summary.photos_created += 1;
            }

            println!("{}  ✅ {}{}", GREEN, created.display_name(), RESET);
        }

        Ok(())
    }

    fn report(&mut self, problem: String) {
        println!("{}  ❌ {}{}", RED, problem, RESET);
        self.summary.problems.push(problem);
    }

    fn print_summary(&self, elapsed_secs: f64) {
        let s = &self.summary;
        println!("\n{}📋 Load Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────");
        println!("  • Brands created: {}{}{}", GREEN, s.brands_created, RESET);
        println!("  • Brands skipped: {}{}{}", YELLOW, s.brands_skipped, RESET);
        println!("  • Cars created:   {}{}{}", GREEN, s.cars_created, RESET);
        println!("  • Cars invalid:   {}{}{}", RED, s.cars_invalid, RESET);
        println!("  • Photos created: {}{}{}", GREEN, s.photos_created, RESET);
        println!("  • Duration: {:.1}s", elapsed_secs);

        if !s.problems.is_empty() {
            println!("\n{}⚠️  {} record(s) rejected{}", YELLOW, s.problems.len(), RESET);
        }
    }
}

async fn run(path: &str) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path))?;
    let fixture: Fixture =
        serde_json::from_str(&raw).with_context(|| format!("{} is not a valid fixture", path))?;

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        bail!("configuration error: {}", e);
    }

    let pool = config::init_db_pool(&config)
        .await
        .context("failed to open the database")?;

    println!("{}🚗 Loading {} brand(s) from {}{}\n", BOLD, fixture.brands.len(), path, RESET);

    let started = Instant::now();
    let mut populator = Populator {
        pool,
        summary: LoadSummary::default(),
    };
    populator.load(&fixture).await?;
    populator.print_summary(started.elapsed().as_secs_f64());

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: populate <fixture.json>");
            process::exit(2);
        }
    };

    if let Err(e) = run(&path).await {
        eprintln!("{}❌ {:#}{}", RED, e, RESET);
        process::exit(1);
    }
}
