//! Scene composition: one sub-tree per cabinet, cabinets side by side.

use joinery_types::{
    Axis, CabinetSpec, Color, MaterialColorMap, PlacedShape, Shape, HARDWARE_GRAY,
};
use tracing::{debug, info};

use crate::config::ResolvedThicknesses;
use crate::errors::BuildError;
use crate::fronts::{self, FrontPanel};
use crate::hardware::{
    self, Hinge, FOOT_DIAMETER, FOOT_HEIGHT, HINGE_CUP_DEPTH, HINGE_CUP_DIAMETER,
};
use crate::panels;
use crate::scene::AssemblyNode;
use crate::shelves;

/// Build one cabinet's sub-tree in cabinet-local coordinates. The caller
/// positions it in the scene via the node translation.
pub fn build_cabinet(
    spec: &CabinetSpec,
    corpus_color: Color,
    front_color: Color,
) -> Result<AssemblyNode, BuildError> {
    let t = ResolvedThicknesses::resolve(spec)?;
    let ad = panels::adjusted_depth(spec, &t);
    let mut children = Vec::new();

    for panel in panels::layout_panels(spec, &t) {
        children.push(AssemblyNode::geometry(
            panel.role.part_name(),
            PlacedShape::boxed(panel.size, panel.position),
            Some(corpus_color),
        ));
    }

    let front_panels = fronts::layout_fronts(spec, &t, ad);
    let mut all_hinges: Vec<Hinge> = Vec::new();
    for front in &front_panels {
        let hinges = if spec.add_hardware {
            hardware::place_hinges(&spec.name, front)?
        } else {
            Vec::new()
        };
        children.push(AssemblyNode::geometry(
            front.label.clone(),
            front_shape(front, &hinges),
            Some(front_color),
        ));
        all_hinges.extend(hinges);
    }

    for (i, shelf) in shelves::layout_shelves(spec, &t, ad).into_iter().enumerate() {
        children.push(AssemblyNode::geometry(
            format!("Shelf {}", i + 1),
            PlacedShape::boxed(shelf.size, shelf.position),
            Some(corpus_color),
        ));
    }

    for (i, hinge) in all_hinges.into_iter().enumerate() {
        children.push(AssemblyNode::geometry(
            format!("Hinge {}", i + 1),
            PlacedShape::cylinder(
                HINGE_CUP_DIAMETER,
                HINGE_CUP_DEPTH,
                Axis::Z,
                hinge.position,
            ),
            Some(HARDWARE_GRAY),
        ));
    }

    if t.bottom > 0.0 {
        for (i, foot) in hardware::place_feet(spec.width, ad).into_iter().enumerate() {
            children.push(AssemblyNode::geometry(
                format!("Foot {}", i + 1),
                PlacedShape::cylinder(FOOT_DIAMETER, FOOT_HEIGHT, Axis::Y, foot.position),
                Some(HARDWARE_GRAY),
            ));
        }
    }

    debug!(
        cabinet = %spec.name,
        parts = children.len(),
        "cabinet geometry composed"
    );
    Ok(AssemblyNode::group(spec.name.clone(), children))
}

/// A front's solid: a plain box, or a box with hinge cup voids carved out.
fn front_shape(front: &FrontPanel, hinges: &[Hinge]) -> PlacedShape {
    let base = PlacedShape::boxed(front.size, front.position);
    if hinges.is_empty() {
        return base;
    }
    let cuts = hinges
        .iter()
        .map(|h| {
            PlacedShape::cylinder(HINGE_CUP_DIAMETER, HINGE_CUP_DEPTH, Axis::Z, h.position)
        })
        .collect();
    PlacedShape {
        position: front.position,
        shape: Shape::Difference {
            base: Box::new(base),
            cuts,
        },
    }
}

/// Compose the full scene: color maps over the whole batch first, then one
/// cabinet node per spec, laid out left to right with no gaps.
pub fn compose_scene(batch_name: &str, specs: &[CabinetSpec]) -> Result<AssemblyNode, BuildError> {
    let corpus_colors =
        MaterialColorMap::from_labels(specs.iter().map(|s| s.corpus_material.as_str()));
    let front_colors =
        MaterialColorMap::from_labels(specs.iter().map(|s| s.front_material.as_str()));

    let mut cabinets = Vec::with_capacity(specs.len());
    let mut running_x = 0.0;
    for spec in specs {
        // Maps were built over every spec in the batch, lookups cannot miss.
        let corpus_color = corpus_colors
            .color_of(&spec.corpus_material)
            .unwrap_or(HARDWARE_GRAY);
        let front_color = front_colors
            .color_of(&spec.front_material)
            .unwrap_or(HARDWARE_GRAY);

        let cabinet = build_cabinet(spec, corpus_color, front_color)?.with_translation([
            running_x + spec.width / 2.0,
            0.0,
            -spec.depth / 2.0,
        ]);
        cabinets.push(cabinet);
        running_x += spec.width;
    }

    info!(
        batch = batch_name,
        cabinets = cabinets.len(),
        total_width = running_x,
        "scene composed"
    );
    Ok(AssemblyNode::group(batch_name, cabinets))
}
