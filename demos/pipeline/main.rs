//! brepedit pipeline demo: grouping, defeaturing and element removal on a
//! document.
//!
//! Usage:
//! ```text
//! cargo run --example pipeline
//! RUST_LOG=brepedit=debug cargo run --example pipeline
//! ```

use brepedit::document::Document;
use brepedit::math::{Point3, Vector3};
use brepedit::operations::creation::{MakeBox, MakeCompound, MakePrism};
use brepedit::operations::modification::{
    Defeature, DefeatureParams, RemovalOutcome, RemoveElement,
};
use brepedit::operations::query::{ElementType, Explore, IsValid, Volume};
use brepedit::topology::Shape;

const VOLUME_THRESHOLD: f64 = 1.0;

fn main() -> brepedit::Result<()> {
    // Default: WARN for everything, INFO for brepedit.
    // Override with RUST_LOG env var (e.g. RUST_LOG=brepedit=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pipeline=info".parse().unwrap_or_default())
        .add_directive("brepedit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut doc = Document::new("pipeline");
    group_primitives(&mut doc)?;
    defeature_imported_part(&mut doc)?;
    remove_middle_solid(&mut doc)?;

    let summary = doc.recompute();
    println!(
        "Recomputed {} object(s), {} invalid",
        summary.recomputed.len(),
        summary.invalid.len()
    );
    for (_, object) in doc.objects() {
        println!("  {} ({}) -> {}", object.name(), object.label, object.shape().kind());
    }
    let bounds = doc.bounds()?;
    println!(
        "Document extents: {:?} to {:?}",
        bounds.min.coords.as_slice(),
        bounds.max.coords.as_slice()
    );
    Ok(())
}

/// A box and two faceted cylinders laid out along x and collected in a group.
fn group_primitives(doc: &mut Document) -> brepedit::Result<()> {
    let store = doc.store_mut();
    let block = MakeBox::with_size(Point3::new(0.0, 0.0, 0.0), 10.0, 10.0, 10.0).execute(store)?;
    let post = MakePrism::cylinder(
        Point3::new(20.0, 5.0, 0.0),
        5.0,
        Vector3::new(0.0, 0.0, 15.0),
        32,
    )
    .execute(store)?;
    let puck = MakePrism::cylinder(
        Point3::new(36.0, 5.0, 0.0),
        6.0,
        Vector3::new(0.0, 0.0, 4.0),
        32,
    )
    .execute(store)?;

    let members = vec![
        doc.add_object("Box", block.into())?,
        doc.add_object("Cylinder", post.into())?,
        doc.add_object("Cylinder", puck.into())?,
    ];
    let group = doc.add_group("MyGroup", &members)?;
    let group = doc.group(group)?;
    let bounds = doc.bounds_of(group.members())?;
    println!(
        "{}: {} members, extent diagonal {:.3}",
        group.name(),
        group.members().len(),
        bounds.diagonal()
    );
    Ok(())
}

/// A base block with a faceted boss and a tiny stray chip, grouped like an
/// imported multi-body part.
fn defeature_imported_part(doc: &mut Document) -> brepedit::Result<()> {
    let store = doc.store_mut();
    let base = MakeBox::with_size(Point3::origin(), 20.0, 10.0, 5.0).execute(store)?;
    let boss = MakePrism::cylinder(
        Point3::new(30.0, 5.0, 0.0),
        2.0,
        Vector3::new(0.0, 0.0, 8.0),
        24,
    )
    .execute(store)?;
    let chip = MakeBox::with_size(Point3::new(-5.0, 0.0, 0.0), 0.1, 0.1, 0.1).execute(store)?;
    let part = MakeCompound::new(vec![base.into(), boss.into(), chip.into()]).execute(store)?;
    let id = doc.add_object("Part", part.into())?;

    let params = DefeatureParams::default().with_volume_threshold(VOLUME_THRESHOLD);
    let report = Defeature::new(part, params).report(doc.store())?;
    println!(
        "Part: {} faces below area {}, {} of {} solids below volume {}",
        report.small_faces.len(),
        params.area_threshold,
        report.small_solids.len(),
        report.solid_count,
        VOLUME_THRESHOLD
    );
    for (solid, volume) in &report.small_solids {
        println!("  small {} with volume {volume:.4}", solid.kind());
    }

    let simplified = doc.defeature(id, params)?;
    doc.object_mut(id)?.label = "Part (defeatured)".into();
    let volume = Volume::new(simplified).execute(doc.store())?;
    println!(
        "Part defeatured: {} solids, volume {volume:.3}",
        count(doc, simplified, ElementType::Solid)?
    );
    doc.recompute();
    Ok(())
}

/// Three cylinders side by side; the middle one is removed.
fn remove_middle_solid(doc: &mut Document) -> brepedit::Result<()> {
    let mut cylinders = Vec::new();
    for i in 0..3 {
        let center = Point3::new(f64::from(i) * 10.0, 0.0, 0.0);
        let solid = MakePrism::cylinder(center, 3.0, Vector3::new(0.0, 0.0, 10.0), 32)
            .execute(doc.store_mut())?;
        cylinders.push(Shape::from(solid));
    }
    let group = MakeCompound::new(cylinders).execute(doc.store_mut())?;
    let id = doc.add_object("Cylinder", group.into())?;

    match RemoveElement::new(id, ElementType::Solid, 1).execute(doc)? {
        RemovalOutcome::Replaced { shape, strategy } => println!(
            "Cylinders: {} solids left as {} ({strategy}), valid: {}",
            count(doc, shape, ElementType::Solid)?,
            shape.kind(),
            IsValid::new(shape).execute(doc.store())
        ),
        RemovalOutcome::ObjectDeleted(object) => {
            println!("Cylinders: nothing left, deleted {}", object.name());
        }
    }
    doc.recompute();
    Ok(())
}

fn count(doc: &Document, shape: Shape, element_type: ElementType) -> brepedit::Result<usize> {
    Ok(Explore::new(shape, element_type).execute(doc.store())?.len())
}
