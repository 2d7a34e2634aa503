use crate::error::Result;
use crate::operations::query::{ElementType, Explore};
use crate::tessellation::TessellateShape;
use crate::topology::{Shape, ShellId, SolidId, TopologyStore};

/// Computes the enclosed volume of a shape.
///
/// Solids contribute their outer shell volume minus their voids; compounds
/// sum the solids they contain; a closed shell contributes the volume it
/// bounds. Everything else has zero volume.
pub struct Volume {
    shape: Shape,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
        }
    }

    /// Executes the query, returning the volume.
    ///
    /// # Errors
    ///
    /// Returns an error if a face cannot be tessellated.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        match self.shape {
            Shape::Solid(id) => solid_volume(store, id),
            Shape::Shell(id) if store.shell(id)?.is_closed => {
                Ok(signed_shell_volume(store, id)?.abs())
            }
            Shape::Compound(_) => {
                let mut total = 0.0;
                for solid in Explore::new(self.shape, ElementType::Solid).execute(store)? {
                    if let Shape::Solid(id) = solid {
                        total += solid_volume(store, id)?;
                    }
                }
                Ok(total)
            }
            _ => Ok(0.0),
        }
    }
}

fn solid_volume(store: &TopologyStore, solid: SolidId) -> Result<f64> {
    let data = store.solid(solid)?;
    let mut volume = signed_shell_volume(store, data.outer_shell)?.abs();
    for &void in &data.inner_shells {
        volume -= signed_shell_volume(store, void)?.abs();
    }
    Ok(volume)
}

/// Signed volume bounded by a shell: positive when its faces point outward.
///
/// Uses the signed tetrahedron method. For each triangle, computes
/// `(1/6) * v0 . (v1 x v2)` and sums over all triangles. The mesh normals
/// decide the sign of each contribution, so the result follows face
/// orientation rather than tessellation winding.
///
/// # Errors
///
/// Returns an error if the shell or a face cannot be tessellated.
pub fn signed_shell_volume(store: &TopologyStore, shell: ShellId) -> Result<f64> {
    let mesh = TessellateShape::new(Shape::Shell(shell)).execute(store)?;

    let mut signed_volume = 0.0;
    for (tri, [v0, v1, v2]) in mesh.indices.iter().zip(mesh.triangles()) {
        let cross = (v1 - v0).cross(&(v2 - v0));
        let det = v0.coords.dot(&v1.coords.cross(&v2.coords));

        let avg_normal = mesh.normals[tri[0] as usize]
            + mesh.normals[tri[1] as usize]
            + mesh.normals[tri[2] as usize];

        if avg_normal.dot(&cross) >= 0.0 {
            signed_volume += det;
        } else {
            signed_volume -= det;
        }
    }

    Ok(signed_volume / 6.0)
}
