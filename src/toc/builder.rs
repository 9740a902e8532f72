use log::{debug, warn};

use crate::toc::types::{HeadingDescriptor, Hierarchy, Node, NodeId};

/// Build the outline hierarchy from headings in document order.
///
/// Each heading is attached by walking up from the previously attached node:
/// a deeper heading becomes its child, an equal one its sibling, and a
/// shallower one keeps climbing. The root has level 0, so the walk always
/// stops there at the latest.
pub fn build<I>(headings: I) -> Hierarchy
where
    I: IntoIterator<Item = HeadingDescriptor>,
{
    let mut hierarchy = Hierarchy::default();
    let mut previous = NodeId::ROOT;

    for heading in headings {
        let level = if heading.level == 0 {
            warn!("Heading {:?} has level 0, treating it as level 1", heading.text);
            1
        } else {
            heading.level
        };

        let parent = resolve_parent(&hierarchy, previous, level);
        let id = NodeId(hierarchy.nodes.len());
        hierarchy.nodes.push(Node::from_descriptor(heading, level, parent));
        hierarchy.nodes[parent.0].children.push(id);
        previous = id;
    }

    debug!("Built outline with {} headings", hierarchy.len() - 1);
    hierarchy
}

fn resolve_parent(hierarchy: &Hierarchy, previous: NodeId, level: usize) -> NodeId {
    let mut walk = previous;
    loop {
        let node = &hierarchy.nodes[walk.0];
        if level > node.level {
            return walk;
        }
        if level == node.level {
            return node.parent;
        }
        walk = node.parent;
    }
}
