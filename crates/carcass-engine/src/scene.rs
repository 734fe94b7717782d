//! The assembly tree handed to persistence/viewing collaborators.
//!
//! Strictly tree-shaped ownership, built bottom-up and never mutated after
//! composition. Node names are stable and unique within their parent.

use joinery_types::{Color, PlacedShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Either leaf geometry or a group of child nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeContent {
    Geometry { shape: PlacedShape },
    Group { children: Vec<AssemblyNode> },
}

/// A named node in the assembly tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyNode {
    pub id: Uuid,
    pub name: String,
    /// Translation applied to this node's subtree, if any.
    pub translation: Option<[f64; 3]>,
    pub color: Option<Color>,
    pub content: NodeContent,
}

/// A leaf part with all ancestor translations applied, ready for lowering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPart {
    pub name: String,
    pub color: Option<Color>,
    pub shape: PlacedShape,
}

impl AssemblyNode {
    pub fn geometry(name: impl Into<String>, shape: PlacedShape, color: Option<Color>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            translation: None,
            color,
            content: NodeContent::Geometry { shape },
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<AssemblyNode>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            translation: None,
            color: None,
            content: NodeContent::Group { children },
        }
    }

    pub fn with_translation(mut self, translation: [f64; 3]) -> Self {
        self.translation = Some(translation);
        self
    }

    pub fn children(&self) -> &[AssemblyNode] {
        match &self.content {
            NodeContent::Group { children } => children,
            NodeContent::Geometry { .. } => &[],
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&AssemblyNode> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Number of geometry leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match &self.content {
            NodeContent::Geometry { .. } => 1,
            NodeContent::Group { children } => children.iter().map(|c| c.leaf_count()).sum(),
        }
    }

    /// Flatten the tree into leaf parts with accumulated translations
    /// applied, in depth-first child order.
    pub fn flattened(&self) -> Vec<FlatPart> {
        let mut out = Vec::new();
        self.flatten_into([0.0, 0.0, 0.0], &mut out);
        out
    }

    fn flatten_into(&self, offset: [f64; 3], out: &mut Vec<FlatPart>) {
        let offset = match self.translation {
            Some(t) => [offset[0] + t[0], offset[1] + t[1], offset[2] + t[2]],
            None => offset,
        };
        match &self.content {
            NodeContent::Geometry { shape } => out.push(FlatPart {
                name: self.name.clone(),
                color: self.color,
                shape: shape.translated(offset),
            }),
            NodeContent::Group { children } => {
                for child in children {
                    child.flatten_into(offset, out);
                }
            }
        }
    }
}
