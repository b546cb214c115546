//! Declarative route table for the routed entities.
//!
//! The navigable surface is the `Route` enum in `main.rs`; the tables here
//! carry the metadata the router enum cannot: required-authority sets, page
//! titles, and which outlet an entry renders into. The guard layout resolves
//! the active route against this table on every navigation via
//! [`descriptor_for`].
//!
//! Each entity contributes two parallel tables — primary-outlet routes and
//! popup-outlet routes — chained together in [`routes`]. Adding an entity
//! means adding one chain line; nothing else depends on the number of
//! entities.

use crate::Route;

/// Which rendering region a route targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutlet {
    /// The main content region.
    Primary,
    /// The overlay region layered above the primary view.
    Popup,
}

/// Metadata for one navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern; `:name` segments match any single segment.
    pub pattern: &'static str,
    /// Page title applied when the route activates.
    pub title: &'static str,
    /// Required-authority set. Empty means any authenticated account.
    pub authorities: &'static [&'static str],
    pub outlet: RouteOutlet,
}

/// Primary-outlet routes for the todo entity.
pub static TODO_ROUTES: [RouteDescriptor; 2] = [
    RouteDescriptor {
        pattern: "/todo",
        title: "Todos",
        authorities: &[],
        outlet: RouteOutlet::Primary,
    },
    RouteDescriptor {
        pattern: "/todo/:id",
        title: "Todos",
        authorities: &[],
        outlet: RouteOutlet::Primary,
    },
];

/// Popup-outlet routes for the todo entity: create, edit, and delete
/// confirmation share the overlay lifecycle and stay deep-linkable.
pub static TODO_POPUP_ROUTES: [RouteDescriptor; 3] = [
    RouteDescriptor {
        pattern: "/todo-new",
        title: "Todos",
        authorities: &[],
        outlet: RouteOutlet::Popup,
    },
    RouteDescriptor {
        pattern: "/todo/:id/edit",
        title: "Todos",
        authorities: &[],
        outlet: RouteOutlet::Popup,
    },
    RouteDescriptor {
        pattern: "/todo/:id/delete",
        title: "Todos",
        authorities: &[],
        outlet: RouteOutlet::Popup,
    },
];

/// Every routed entity chains its tables here.
pub fn routes() -> impl Iterator<Item = &'static RouteDescriptor> {
    TODO_ROUTES.iter().chain(TODO_POPUP_ROUTES.iter())
}

/// Match a pattern against a path. Returns the number of literal segments
/// on success — the specificity used to rank competing matches.
fn pattern_matches(pattern: &str, path: &str) -> Option<usize> {
    let pattern_segments: Vec<&str> = pattern.trim_start_matches('/').split('/').collect();
    let path = path.trim_start_matches('/').trim_end_matches('/');
    let path_segments: Vec<&str> = path.split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut literals = 0;
    for (pat, seg) in pattern_segments.iter().zip(&path_segments) {
        if pat.starts_with(':') {
            if seg.is_empty() {
                return None;
            }
        } else if pat == seg {
            literals += 1;
        } else {
            return None;
        }
    }
    Some(literals)
}

/// Select the most specific table entry matching `path`.
pub fn match_path(path: &str) -> Option<&'static RouteDescriptor> {
    let path = path.split('?').next().unwrap_or(path);
    routes()
        .filter_map(|d| pattern_matches(d.pattern, path).map(|s| (s, d)))
        .max_by_key(|(specificity, _)| *specificity)
        .map(|(_, d)| d)
}

/// Descriptor for the currently matched route, if it is a table entry.
pub fn descriptor_for(route: &Route) -> Option<&'static RouteDescriptor> {
    match_path(&route.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_entries_are_guarded_authenticated_only() {
        assert_eq!(routes().count(), 5);
        for descriptor in routes() {
            assert!(
                descriptor.authorities.is_empty(),
                "{} should require authentication only",
                descriptor.pattern
            );
            assert_eq!(descriptor.title, "Todos");
        }
    }

    #[test]
    fn popup_entries_classify_as_popup() {
        for path in ["/todo-new", "/todo/42/edit", "/todo/42/delete"] {
            let descriptor = match_path(path).unwrap();
            assert_eq!(descriptor.outlet, RouteOutlet::Popup, "{path}");
        }
        for path in ["/todo", "/todo/42"] {
            let descriptor = match_path(path).unwrap();
            assert_eq!(descriptor.outlet, RouteOutlet::Primary, "{path}");
        }
    }

    #[test]
    fn params_match_any_single_segment() {
        assert_eq!(match_path("/todo/42").unwrap().pattern, "/todo/:id");
        assert_eq!(
            match_path("/todo/42/edit").unwrap().pattern,
            "/todo/:id/edit"
        );
        assert!(match_path("/todo/42/rename").is_none());
        assert!(match_path("/todos").is_none());
        assert!(match_path("/").is_none());
    }

    #[test]
    fn more_literal_segments_win() {
        // "/todo-new" is a literal sibling of the ":id" pattern family; a
        // literal segment scores higher than a parameter at the same depth.
        assert!(pattern_matches("/todo/:id", "/todo/edit").unwrap() < pattern_matches("/todo/edit", "/todo/edit").unwrap());
        assert_eq!(match_path("/todo-new").unwrap().pattern, "/todo-new");
    }

    #[test]
    fn descriptor_for_resolves_enum_routes() {
        let edit = Route::TodoEdit {
            id: "42".to_string(),
        };
        let descriptor = descriptor_for(&edit).unwrap();
        assert_eq!(descriptor.pattern, "/todo/:id/edit");
        assert_eq!(descriptor.outlet, RouteOutlet::Popup);

        let list = Route::TodoList {};
        assert_eq!(descriptor_for(&list).unwrap().pattern, "/todo");

        let login = Route::Login {};
        assert!(descriptor_for(&login).is_none());
    }

    #[test]
    fn query_strings_do_not_break_matching() {
        assert_eq!(match_path("/todo?sort=id,desc").unwrap().pattern, "/todo");
    }
}
