#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use brepedit::document::{Document, ObjectId};
use brepedit::error::{BrepEditError, EditError};
use brepedit::math::Point3;
use brepedit::operations::creation::{MakeBox, MakeCompound, MakeFace, MakePolygon};
use brepedit::operations::modification::{
    DefeatureParams, RemovalOutcome, RemoveElement, Strategy,
};
use brepedit::operations::query::{ElementType, Explore, IsClosed, IsValid, Volume};
use brepedit::topology::{Shape, ShapeKind};

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn cube(doc: &mut Document, x: f64, size: f64) -> Shape {
    MakeBox::new(p(x, 0.0, 0.0), p(x + size, size, size))
        .execute(doc.store_mut())
        .unwrap()
        .into()
}

fn count(doc: &Document, shape: Shape, element_type: ElementType) -> usize {
    Explore::new(shape, element_type)
        .execute(doc.store())
        .unwrap()
        .len()
}

fn replaced(outcome: RemovalOutcome) -> (Shape, Strategy) {
    match outcome {
        RemovalOutcome::Replaced { shape, strategy } => (shape, strategy),
        RemovalOutcome::ObjectDeleted(object) => panic!("{} was deleted", object.name()),
    }
}

fn pentagon(doc: &mut Document) -> Shape {
    let points = (0..5)
        .map(|i| {
            let angle = std::f64::consts::TAU * f64::from(i) / 5.0;
            p(angle.cos(), angle.sin(), 0.0)
        })
        .collect();
    let wire = MakePolygon::new(points, true)
        .execute(doc.store_mut())
        .unwrap();
    MakeFace::new(wire, vec![])
        .execute(doc.store_mut())
        .unwrap()
        .into()
}

fn three_cubes(doc: &mut Document, sizes: [f64; 3]) -> ObjectId {
    let solids = vec![
        cube(doc, 0.0, sizes[0]),
        cube(doc, 20.0, sizes[1]),
        cube(doc, 40.0, sizes[2]),
    ];
    let compound = MakeCompound::new(solids).execute(doc.store_mut()).unwrap();
    doc.add_object("Part", compound.into()).unwrap()
}

#[test]
fn defeature_by_volume_keeps_the_large_solids() {
    let mut doc = Document::new("scenario");
    let id = three_cubes(&mut doc, [10.0, 10.0, 0.1]);

    let params = DefeatureParams::default().with_volume_threshold(1.0);
    let result = doc.defeature(id, params).unwrap();

    assert!(matches!(result, Shape::Compound(_)));
    assert_eq!(doc.object(id).unwrap().shape(), result);
    assert!(doc.object(id).unwrap().is_touched());
    let solids = Explore::new(result, ElementType::Solid)
        .execute(doc.store())
        .unwrap();
    assert_eq!(solids.len(), 2);
    for solid in solids {
        assert_relative_eq!(
            Volume::new(solid).execute(doc.store()).unwrap(),
            1000.0,
            epsilon = 1e-6
        );
    }
}

#[test]
fn removing_a_cube_face_leaves_an_open_shell() {
    let mut doc = Document::new("scenario");
    let shape = cube(&mut doc, 0.0, 1.0);
    let id = doc.add_object("Box", shape).unwrap();

    let (shape, strategy) = replaced(
        RemoveElement::new(id, ElementType::Face, 0)
            .execute(&mut doc)
            .unwrap(),
    );
    assert_eq!(strategy, Strategy::OpenShell);
    assert_eq!(shape.kind(), ShapeKind::Shell);
    assert!(!IsClosed::new(shape).execute(doc.store()));
    assert_eq!(count(&doc, shape, ElementType::Face), 5);
}

#[test]
fn removing_the_only_solid_deletes_the_object() {
    let mut doc = Document::new("scenario");
    let shape = cube(&mut doc, 0.0, 1.0);
    let id = doc.add_object("Box", shape).unwrap();

    let outcome = RemoveElement::new(id, ElementType::Solid, 0)
        .execute(&mut doc)
        .unwrap();
    let RemovalOutcome::ObjectDeleted(object) = outcome else {
        panic!("expected the object to be deleted")
    };
    assert_eq!(object.name(), "Box");
    assert!(doc.object(id).is_err());
    assert!(doc.is_empty());
}

/// A three-edge open polyline and a separate segment, four edges in all.
fn polyline_and_segment(doc: &mut Document) -> Shape {
    let store = doc.store_mut();
    let polyline = MakePolygon::new(
        vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
        false,
    )
    .execute(store)
    .unwrap();
    let segment = MakePolygon::new(vec![p(5.0, 0.0, 0.0), p(6.0, 0.0, 0.0)], false)
        .execute(store)
        .unwrap();
    MakeCompound::new(vec![polyline.into(), segment.into()])
        .execute(store)
        .unwrap()
        .into()
}

#[test]
fn unchainable_edges_fall_back_to_a_compound() {
    let mut doc = Document::new("scenario");
    let shape = polyline_and_segment(&mut doc);
    let id = doc.add_object("Sketch", shape).unwrap();
    assert_eq!(count(&doc, shape, ElementType::Edge), 4);

    let (shape, strategy) = replaced(
        RemoveElement::new(id, ElementType::Edge, 2)
            .execute(&mut doc)
            .unwrap(),
    );
    assert_eq!(strategy, Strategy::Compound);
    let Shape::Compound(compound) = shape else {
        panic!("expected a compound")
    };
    let children = &doc.store().compound(compound).unwrap().children;
    assert_eq!(children.len(), 3);
    assert!(children.iter().all(|c| c.kind() == ShapeKind::Edge));
    assert!(IsValid::new(shape).execute(doc.store()));
}

#[test]
fn open_edge_chain_stays_a_wire() {
    let mut doc = Document::new("scenario");
    let square = MakePolygon::new(
        vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)],
        true,
    )
    .execute(doc.store_mut())
    .unwrap();
    let id = doc.add_object("Sketch", square.into()).unwrap();

    let (shape, strategy) = replaced(
        RemoveElement::new(id, ElementType::Edge, 2)
            .execute(&mut doc)
            .unwrap(),
    );
    assert_eq!(strategy, Strategy::Wire);
    assert_eq!(shape.kind(), ShapeKind::Wire);
    assert!(!IsClosed::new(shape).execute(doc.store()));
    assert!(IsValid::new(shape).execute(doc.store()));
    assert_eq!(count(&doc, shape, ElementType::Edge), 3);
}

#[test]
fn vertex_index_past_the_end_is_rejected() {
    let mut doc = Document::new("scenario");
    let face = pentagon(&mut doc);
    let id = doc.add_object("Pentagon", face).unwrap();
    assert_eq!(count(&doc, face, ElementType::Vertex), 5);

    let result = RemoveElement::new(id, ElementType::Vertex, 5).execute(&mut doc);
    assert!(matches!(
        result,
        Err(BrepEditError::Edit(EditError::IndexOutOfRange {
            element_type: ElementType::Vertex,
            index: 5,
            total: 5,
        }))
    ));
    assert_eq!(doc.object(id).unwrap().shape(), face);
}

#[test]
fn area_threshold_above_every_face_fails() {
    let mut doc = Document::new("scenario");
    // largest faces are 10 x 5 = 50
    let slab: Shape = MakeBox::new(p(0.0, 0.0, 0.0), p(10.0, 5.0, 1.0))
        .execute(doc.store_mut())
        .unwrap()
        .into();
    let id = doc.add_object("Slab", slab).unwrap();

    let result = doc.defeature(id, DefeatureParams::default().with_area_threshold(100.0));
    assert!(matches!(
        result,
        Err(BrepEditError::Edit(EditError::AllElementsBelowThreshold {
            kind: ShapeKind::Face,
            ..
        }))
    ));
    assert_eq!(doc.object(id).unwrap().shape(), slab);
}

#[test]
fn removal_counts_drop_by_one() {
    let mut doc = Document::new("properties");
    for (element_type, total) in [
        (ElementType::Face, 6),
        (ElementType::Edge, 12),
        (ElementType::Vertex, 8),
    ] {
        let shape = cube(&mut doc, 0.0, 1.0);
        let id = doc.add_object("Box", shape).unwrap();
        let (shape, _) = replaced(
            RemoveElement::new(id, element_type, 3)
                .execute(&mut doc)
                .unwrap(),
        );
        assert_eq!(count(&doc, shape, element_type), total - 1, "{element_type}");
    }
}

#[test]
fn removing_one_of_several_solids_gives_a_compound() {
    let mut doc = Document::new("properties");
    let id = three_cubes(&mut doc, [1.0, 2.0, 3.0]);
    let (shape, strategy) = replaced(
        RemoveElement::new(id, ElementType::Solid, 1)
            .execute(&mut doc)
            .unwrap(),
    );
    assert_eq!(strategy, Strategy::Compound);
    let Shape::Compound(compound) = shape else {
        panic!("expected a compound")
    };
    assert_eq!(doc.store().compound(compound).unwrap().children.len(), 2);
    assert_relative_eq!(
        Volume::new(shape).execute(doc.store()).unwrap(),
        28.0,
        epsilon = 1e-9
    );
}

#[test]
fn removing_a_hole_wire_leaves_the_outer_wire() {
    let mut doc = Document::new("properties");
    let store = doc.store_mut();
    let outer = MakePolygon::new(
        vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(4.0, 4.0, 0.0), p(0.0, 4.0, 0.0)],
        true,
    )
    .execute(store)
    .unwrap();
    let hole = MakePolygon::new(
        vec![p(1.0, 1.0, 0.0), p(1.0, 3.0, 0.0), p(3.0, 3.0, 0.0), p(3.0, 1.0, 0.0)],
        true,
    )
    .execute(store)
    .unwrap();
    let face = MakeFace::new(outer, vec![hole]).execute(store).unwrap();
    let id = doc.add_object("Plate", face.into()).unwrap();

    let (shape, strategy) = replaced(
        RemoveElement::new(id, ElementType::Wire, 1)
            .execute(&mut doc)
            .unwrap(),
    );
    assert_eq!(strategy, Strategy::Single);
    assert_eq!(shape, Shape::Wire(outer));
}

#[test]
fn bad_requests_fail_before_touching_the_document() {
    let mut doc = Document::new("properties");
    let shape = cube(&mut doc, 0.0, 1.0);
    let id = doc.add_object("Box", shape).unwrap();
    doc.recompute();

    assert!(matches!(
        RemoveElement::new(id, ElementType::Edge, -1).execute(&mut doc),
        Err(BrepEditError::Edit(EditError::IndexOutOfRange { index: -1, .. }))
    ));
    let face = pentagon(&mut doc);
    let flat = doc.add_object("Flat", face).unwrap();
    assert!(matches!(
        RemoveElement::new(flat, ElementType::Solid, 0).execute(&mut doc),
        Err(BrepEditError::Edit(EditError::NoElementsOfType(ElementType::Solid)))
    ));
    assert!(matches!(
        "Compound".parse::<ElementType>(),
        Err(EditError::UnsupportedElementType(tag)) if tag == "Compound"
    ));
    assert!(!doc.object(id).unwrap().is_touched());
}

#[test]
fn validity_queries_are_repeatable() {
    let mut doc = Document::new("properties");
    let shape = cube(&mut doc, 0.0, 1.0);
    let valid = IsValid::new(shape);
    let closed = IsClosed::new(shape);
    for _ in 0..3 {
        assert!(valid.execute(doc.store()));
        assert!(closed.execute(doc.store()));
    }
}
