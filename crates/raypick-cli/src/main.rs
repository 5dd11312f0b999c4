//! raypick CLI - cast rays into scene files
//!
//! Loads a TOML scene description, places its meshes and reports what a ray
//! hits.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use raypick_math::{Point3, Vec3};
use raypick_raycast::Ray;
use std::path::{Path, PathBuf};

mod report;
mod scene_file;

use report::HitRow;
use scene_file::SceneFile;

#[derive(Parser)]
#[command(name = "raypick")]
#[command(about = "Ray casting against triangle mesh scenes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a ray and list the hits, nearest first
    Cast {
        /// Path to the scene file
        scene: PathBuf,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,
        /// Ray direction as x,y,z (need not be unit length)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,
        /// Only report the nearest hit
        #[arg(long)]
        closest: bool,
        /// Print hits as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display objects, triangle counts and placement of a scene file
    Info {
        /// Path to the scene file
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cast {
            scene,
            origin,
            direction,
            closest,
            json,
        } => {
            cast(&scene, Point3::from(origin), direction, closest, json)?;
        }
        Commands::Info { scene } => {
            let loaded = SceneFile::load(&scene)?.build()?;
            println!("raypick scene: {}", scene.display());
            report::print_info(&loaded)?;
        }
    }

    Ok(())
}

fn cast(scene: &Path, origin: Point3, direction: Vec3, closest: bool, json: bool) -> Result<()> {
    let ray = Ray::new(origin, direction);
    if ray.is_degenerate() {
        bail!("direction must be non-zero");
    }

    let loaded = SceneFile::load(scene)?.build()?;
    let caster = loaded.caster()?;
    let mut hits = caster.cast_ray(&ray)?;
    if closest {
        hits.truncate(1);
    }

    let rows: Vec<_> = hits.iter().map(|hit| HitRow::new(hit, &loaded)).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        report::print_table(&rows);
    }
    Ok(())
}

/// Parse `x,y,z` into a vector.
fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{s}'"));
    };
    let component = |p: &str| {
        p.parse::<f64>()
            .map_err(|e| format!("invalid component '{p}': {e}"))
    };
    Ok(Vec3::new(component(*x)?, component(*y)?, component(*z)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1,-2.5, 3").unwrap(), Vec3::new(1.0, -2.5, 3.0));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("1,a,3").is_err());
    }

    #[test]
    fn test_cli_parses_cast() {
        let cli = Cli::try_parse_from([
            "raypick",
            "cast",
            "scene.toml",
            "--origin",
            "0,0,5",
            "--direction",
            "0,0,-1",
            "--closest",
        ])
        .unwrap();
        match cli.command {
            Commands::Cast {
                origin,
                direction,
                closest,
                json,
                ..
            } => {
                assert_eq!(origin, Vec3::new(0.0, 0.0, 5.0));
                assert_eq!(direction, Vec3::new(0.0, 0.0, -1.0));
                assert!(closest);
                assert!(!json);
            }
            Commands::Info { .. } => panic!("expected cast"),
        }
    }
}
