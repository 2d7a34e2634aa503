use crate::error::{EditError, Result};
use crate::operations::creation::{MakeCompound, MakeShell, MakeSolid};
use crate::operations::query::{Area, ElementType, Explore, IsValid, Volume};
use crate::topology::{FaceId, Shape, ShapeKind, TopologyStore};

/// Thresholds for [`Defeature`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefeatureParams {
    /// Faces with an area at or below this are discarded.
    pub area_threshold: f64,
    /// Solids with a volume at or below this are discarded, when the shape
    /// holds more than one solid. A threshold of zero counts as unset.
    pub volume_threshold: Option<f64>,
}

impl Default for DefeatureParams {
    fn default() -> Self {
        Self {
            area_threshold: 1.0,
            volume_threshold: None,
        }
    }
}

impl DefeatureParams {
    /// Sets the face area threshold.
    #[must_use]
    pub fn with_area_threshold(mut self, threshold: f64) -> Self {
        self.area_threshold = threshold;
        self
    }

    /// Sets the solid volume threshold.
    #[must_use]
    pub fn with_volume_threshold(mut self, threshold: f64) -> Self {
        self.volume_threshold = Some(threshold);
        self
    }

    /// The volume threshold in effect, `None` when unset or zero.
    #[must_use]
    pub fn effective_volume_threshold(&self) -> Option<f64> {
        self.volume_threshold.filter(|&threshold| threshold != 0.0)
    }
}

/// Small features found by [`Defeature::report`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefeatureReport {
    /// Faces at or below the area threshold with their areas.
    pub small_faces: Vec<(Shape, f64)>,
    /// Solids at or below the volume threshold with their volumes. Empty
    /// when no volume threshold is in effect.
    pub small_solids: Vec<(Shape, f64)>,
    /// Number of faces inspected.
    pub face_count: usize,
    /// Number of solids inspected.
    pub solid_count: usize,
}

/// Simplifies a shape by discarding its small sub-shapes.
///
/// With several solids and a volume threshold, the solids whose volume
/// exceeds the threshold are kept as a compound. Otherwise the faces whose
/// area exceeds the area threshold are sewn into a shell and made a solid.
/// There is no fallback: assembly errors are returned as is.
pub struct Defeature {
    shape: Shape,
    params: DefeatureParams,
}

impl Defeature {
    /// Creates a new `Defeature` operation.
    #[must_use]
    pub fn new(shape: impl Into<Shape>, params: DefeatureParams) -> Self {
        Self {
            shape: shape.into(),
            params,
        }
    }

    /// Executes the operation, returning the simplified shape.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::AllElementsBelowThreshold`] if nothing survives
    /// the threshold, or the kernel error if the survivors cannot be
    /// assembled.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<Shape> {
        let solids = Explore::new(self.shape, ElementType::Solid).execute(store)?;
        match self.params.effective_volume_threshold() {
            Some(threshold) if solids.len() > 1 => self.keep_solids(store, &solids, threshold),
            _ => self.keep_faces(store),
        }
    }

    fn keep_solids(
        &self,
        store: &mut TopologyStore,
        solids: &[Shape],
        threshold: f64,
    ) -> Result<Shape> {
        let mut survivors = Vec::with_capacity(solids.len());
        for &solid in solids {
            if Volume::new(solid).execute(store)? > threshold {
                survivors.push(solid);
            }
        }
        if survivors.is_empty() {
            return Err(EditError::AllElementsBelowThreshold {
                kind: ShapeKind::Solid,
                threshold,
            }
            .into());
        }

        tracing::info!(
            "Kept {} of {} solids above volume {threshold}",
            survivors.len(),
            solids.len()
        );
        Ok(MakeCompound::new(survivors).execute(store)?.into())
    }

    fn keep_faces(&self, store: &mut TopologyStore) -> Result<Shape> {
        let threshold = self.params.area_threshold;
        let faces = Explore::new(self.shape, ElementType::Face).execute(store)?;
        let mut survivors: Vec<FaceId> = Vec::with_capacity(faces.len());
        for &face in &faces {
            if let Shape::Face(id) = face {
                if Area::new(face).execute(store)? > threshold {
                    survivors.push(id);
                }
            }
        }
        if survivors.is_empty() {
            return Err(EditError::AllElementsBelowThreshold {
                kind: ShapeKind::Face,
                threshold,
            }
            .into());
        }

        tracing::info!(
            "Kept {} of {} faces above area {threshold}",
            survivors.len(),
            faces.len()
        );
        let shell = MakeShell::new(survivors).execute(store)?;
        let solid = MakeSolid::new(shell, vec![]).execute(store)?;
        if !IsValid::new(solid).execute(store) {
            tracing::warn!("Defeatured solid is not valid, its shell is likely open");
        }
        Ok(solid.into())
    }

    /// Lists the faces and solids that fall under the thresholds without
    /// modifying anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is missing or cannot be measured.
    pub fn report(&self, store: &TopologyStore) -> Result<DefeatureReport> {
        let mut report = DefeatureReport::default();

        let faces = Explore::new(self.shape, ElementType::Face).execute(store)?;
        report.face_count = faces.len();
        for face in faces {
            let area = Area::new(face).execute(store)?;
            if area <= self.params.area_threshold {
                report.small_faces.push((face, area));
            }
        }

        let solids = Explore::new(self.shape, ElementType::Solid).execute(store)?;
        report.solid_count = solids.len();
        if let Some(threshold) = self.params.effective_volume_threshold() {
            for solid in solids {
                let volume = Volume::new(solid).execute(store)?;
                if volume <= threshold {
                    report.small_solids.push((solid, volume));
                }
            }
        }
        Ok(report)
    }
}
