//! Hit and scene output.

use raypick_raycast::Hit;
use serde::Serialize;

use crate::scene_file::LoadedScene;

/// One hit as printed or serialized.
#[derive(Debug, Serialize)]
pub struct HitRow<'s> {
    pub object: Option<usize>,
    pub name: &'s str,
    pub distance: f64,
    pub position: [f64; 3],
    pub normal: [f64; 3],
    pub triangle: Option<usize>,
}

impl<'s> HitRow<'s> {
    pub fn new(hit: &Hit, loaded: &'s LoadedScene) -> Self {
        Self {
            object: hit.object_id.map(|id| id.index()),
            name: hit.object_id.map_or("?", |id| loaded.name(id)),
            distance: hit.distance,
            position: [hit.origin.x, hit.origin.y, hit.origin.z],
            normal: [hit.normal.x, hit.normal.y, hit.normal.z],
            triangle: hit.triangle,
        }
    }
}

/// Print hits as an aligned table.
pub fn print_table(rows: &[HitRow<'_>]) {
    if rows.is_empty() {
        println!("No hits");
        return;
    }
    println!(
        "{:>4}  {:<16} {:>10}  {:<30} {:<30} {:>4}",
        "id", "name", "distance", "position", "normal", "tri"
    );
    for row in rows {
        println!(
            "{:>4}  {:<16} {:>10.4}  {:<30} {:<30} {:>4}",
            row.object.map_or_else(|| "-".to_string(), |id| id.to_string()),
            row.name,
            row.distance,
            fmt_vec(row.position),
            fmt_vec(row.normal),
            row.triangle.map_or_else(|| "-".to_string(), |t| t.to_string()),
        );
    }
}

/// Print objects with triangle counts, bounds and world placement.
pub fn print_info(loaded: &LoadedScene) -> anyhow::Result<()> {
    let settings = &loaded.settings;
    println!("Settings:");
    println!("  box_epsilon: {}", settings.box_epsilon);
    println!("  forward_only: {}", settings.forward_only);
    match settings.max_distance {
        Some(max) => println!("  max_distance: {max}"),
        None => println!("  max_distance: none"),
    }

    println!("\nObjects: {}", loaded.objects.len());
    for (i, object) in loaded.objects.iter().enumerate() {
        let node = loaded.scene.node(object.node)?;
        let parent = match node.parent() {
            Some(parent) => loaded.scene.node(parent)?.name.as_str(),
            None => "-",
        };
        let mesh = &object.mesh;
        let bbox = mesh.bounding_box();
        let world = loaded.scene.world_transform(object.node)?;
        let origin = world.apply_point(&raypick_math::Point3::origin());

        println!(
            "  {i}: {}{}",
            node.name,
            if node.is_active() { "" } else { " (inactive)" }
        );
        println!("     parent: {parent}");
        println!(
            "     triangles: {} ({})",
            mesh.triangle_count(),
            if mesh.is_indexed() { "indexed" } else { "flat" }
        );
        if bbox.is_empty() {
            println!("     bounds: empty");
        } else {
            println!(
                "     bounds: {} .. {}",
                fmt_vec([bbox.min.x, bbox.min.y, bbox.min.z]),
                fmt_vec([bbox.max.x, bbox.max.y, bbox.max.z])
            );
        }
        println!("     world origin: {}", fmt_vec([origin.x, origin.y, origin.z]));
    }
    Ok(())
}

fn fmt_vec(v: [f64; 3]) -> String {
    format!("({:.4}, {:.4}, {:.4})", v[0], v[1], v[2])
}
