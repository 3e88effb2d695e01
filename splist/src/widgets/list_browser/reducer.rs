use iced::Task;

use super::command::ListBrowserCommand;
use super::event::ListBrowserEffect;
use super::model::{BreadcrumbTarget, EntryId, LoadRequest};
use super::state::ListBrowserState;

/// Runtime context for the list browser reducer.
pub(crate) struct ListBrowserCtx<'a> {
    /// Site the selected list lives in.
    pub(crate) web_url: &'a str,
}

/// Reduce a list browser command into state updates and effects.
pub(crate) fn reduce(
    state: &mut ListBrowserState,
    command: ListBrowserCommand,
    ctx: &ListBrowserCtx<'_>,
) -> Task<ListBrowserEffect> {
    use ListBrowserCommand::*;

    match command {
        SelectedListChanged { list_id } => {
            if !state.select_list(list_id) {
                return Task::none();
            }
            request_load(state, ctx)
        },
        Refresh => request_load(state, ctx),
        Loaded { seq, result } => {
            if !state.apply_loaded(seq, result) {
                log::debug!("dropping stale list load #{seq}");
            }
            Task::none()
        },
        SortColumnClicked { column } => {
            state.cycle_sort(column);
            Task::none()
        },
        EntryActivated { id } => reduce_entry_activated(state, ctx, id),
        BreadcrumbClicked { target } => {
            reduce_breadcrumb_clicked(state, ctx, target)
        },
        GripEntered => {
            state.enter_grip();
            Task::none()
        },
        GripExited => {
            state.leave_grip();
            Task::none()
        },
        ResizeStarted { column } => {
            state.begin_resize(column);
            Task::none()
        },
        CursorMoved { x } => {
            state.track_pointer(x);
            Task::none()
        },
        ResizeFrame => {
            state.commit_resize_frame();
            Task::none()
        },
        ResizeReleased => {
            state.finish_resize();
            Task::none()
        },
        ResizeCanceled => {
            state.cancel_resize();
            Task::none()
        },
    }
}

/// Start a load of the current folder, if a list is selected.
fn request_load(
    state: &mut ListBrowserState,
    ctx: &ListBrowserCtx<'_>,
) -> Task<ListBrowserEffect> {
    let Some(list_id) = state.selected_list_id().map(ToString::to_string)
    else {
        return Task::none();
    };
    let path = state.current_path().to_string();
    let seq = state.begin_load();

    Task::done(ListBrowserEffect::LoadRequested(LoadRequest {
        seq,
        web_url: ctx.web_url.to_string(),
        list_id,
        path,
    }))
}

/// Descend into folders; open everything else in the browser.
fn reduce_entry_activated(
    state: &mut ListBrowserState,
    ctx: &ListBrowserCtx<'_>,
    id: EntryId,
) -> Task<ListBrowserEffect> {
    let Some(entry) = state.entry(&id) else {
        log::debug!("activated entry {id:?} is no longer listed");
        return Task::none();
    };

    if entry.is_container {
        let name = entry.display_name.clone();
        if !state.enter_folder(&name) {
            return Task::none();
        }
        return request_load(state, ctx);
    }

    match entry.resource_url.clone() {
        Some(url) => Task::done(ListBrowserEffect::OpenResource { url }),
        None => Task::none(),
    }
}

fn reduce_breadcrumb_clicked(
    state: &mut ListBrowserState,
    ctx: &ListBrowserCtx<'_>,
    target: BreadcrumbTarget,
) -> Task<ListBrowserEffect> {
    match target {
        BreadcrumbTarget::Root => state.go_to_root(),
        BreadcrumbTarget::Segment(index) => {
            if !state.go_to_segment(index) {
                log::warn!("ignoring breadcrumb index {index} out of range");
                return Task::none();
            }
        },
    }
    request_load(state, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::list_browser::model::{
        Column, Entry, ListDescriptor, ListKind, LoadStatus, LoadedList,
    };

    const WEB: &str = "https://contoso.sharepoint.com/sites/dev";

    fn ctx() -> ListBrowserCtx<'static> {
        ListBrowserCtx { web_url: WEB }
    }

    fn descriptor(kind: ListKind) -> ListDescriptor {
        ListDescriptor {
            id: String::from("lib"),
            title: String::from("Documents"),
            kind,
            root_folder_url: Some(String::from("/sites/dev/Shared Documents")),
        }
    }

    fn folder(parent: &str, name: &str) -> Entry {
        Entry {
            id: EntryId::Path {
                parent: parent.to_string(),
                name: name.to_string(),
            },
            display_name: name.to_string(),
            is_container: true,
            modified: None,
            created: None,
            author: None,
            editor: None,
            resource_url: None,
        }
    }

    fn file(parent: &str, name: &str, url: Option<&str>) -> Entry {
        Entry {
            is_container: false,
            resource_url: url.map(ToString::to_string),
            ..folder(parent, name)
        }
    }

    /// Select `lib`, then complete its initial load with `entries`.
    fn loaded_state(kind: ListKind, entries: Vec<Entry>) -> ListBrowserState {
        let mut state = ListBrowserState::default();
        let _task = reduce(
            &mut state,
            ListBrowserCommand::SelectedListChanged {
                list_id: String::from("lib"),
            },
            &ctx(),
        );
        complete_pending(&mut state, kind, entries);
        state
    }

    /// Complete the most recent load.
    fn complete_pending(
        state: &mut ListBrowserState,
        kind: ListKind,
        entries: Vec<Entry>,
    ) {
        let seq = state.load_seq();
        let applied = state.apply_loaded(
            seq,
            Ok(LoadedList {
                descriptor: descriptor(kind),
                entries,
            }),
        );
        assert!(applied, "pending load should apply");
    }

    #[test]
    fn given_new_selection_when_reduced_then_browser_enters_loading() {
        let mut state = ListBrowserState::default();

        let _task = reduce(
            &mut state,
            ListBrowserCommand::SelectedListChanged {
                list_id: String::from("lib"),
            },
            &ctx(),
        );

        assert_eq!(state.status(), LoadStatus::Loading);
        assert_eq!(state.selected_list_id(), Some("lib"));
    }

    #[test]
    fn given_empty_selection_when_reduced_then_browser_is_cleared() {
        let mut state = loaded_state(
            ListKind::Hierarchical,
            vec![folder("", "Reports")],
        );

        let _task = reduce(
            &mut state,
            ListBrowserCommand::SelectedListChanged {
                list_id: String::new(),
            },
            &ctx(),
        );

        assert!(state.entries().is_empty());
        assert!(state.descriptor().is_none());
        assert_eq!(state.status(), LoadStatus::Ready);
    }

    #[test]
    fn given_folder_row_when_activated_then_path_extends_and_load_starts() {
        let mut state = loaded_state(
            ListKind::Hierarchical,
            vec![folder("", "Reports"), file("", "a.docx", None)],
        );

        let _task = reduce(
            &mut state,
            ListBrowserCommand::EntryActivated {
                id: EntryId::Path {
                    parent: String::new(),
                    name: String::from("Reports"),
                },
            },
            &ctx(),
        );

        assert_eq!(state.current_path(), "Reports");
        assert_eq!(state.status(), LoadStatus::Loading);
    }

    #[test]
    fn given_file_row_when_activated_then_path_is_unchanged() {
        let mut state = loaded_state(
            ListKind::Hierarchical,
            vec![file("", "a.docx", Some("https://contoso/a.docx"))],
        );

        let _task = reduce(
            &mut state,
            ListBrowserCommand::EntryActivated {
                id: EntryId::Path {
                    parent: String::new(),
                    name: String::from("a.docx"),
                },
            },
            &ctx(),
        );

        assert_eq!(state.current_path(), "");
        assert_eq!(state.status(), LoadStatus::Ready);
    }

    #[test]
    fn given_flat_list_when_container_like_row_activated_then_nothing_happens()
    {
        let mut state =
            loaded_state(ListKind::Flat, vec![folder("", "Looks like a folder")]);

        let _task = reduce(
            &mut state,
            ListBrowserCommand::EntryActivated {
                id: EntryId::Path {
                    parent: String::new(),
                    name: String::from("Looks like a folder"),
                },
            },
            &ctx(),
        );

        assert_eq!(state.current_path(), "");
        assert_eq!(state.status(), LoadStatus::Ready);
    }

    #[test]
    fn given_nested_path_when_breadcrumb_root_clicked_then_history_is_empty() {
        let mut state =
            loaded_state(ListKind::Hierarchical, vec![folder("", "A")]);
        let _task = reduce(
            &mut state,
            ListBrowserCommand::EntryActivated {
                id: EntryId::Path {
                    parent: String::new(),
                    name: String::from("A"),
                },
            },
            &ctx(),
        );
        complete_pending(
            &mut state,
            ListKind::Hierarchical,
            vec![folder("A", "B")],
        );
        let _task = reduce(
            &mut state,
            ListBrowserCommand::EntryActivated {
                id: EntryId::Path {
                    parent: String::from("A"),
                    name: String::from("B"),
                },
            },
            &ctx(),
        );
        assert_eq!(state.current_path(), "A/B");
        assert_eq!(state.navigation().history(), ["A"]);

        let _task = reduce(
            &mut state,
            ListBrowserCommand::BreadcrumbClicked {
                target: BreadcrumbTarget::Root,
            },
            &ctx(),
        );

        assert_eq!(state.current_path(), "");
        assert!(state.navigation().history().is_empty());
        assert_eq!(state.status(), LoadStatus::Loading);
    }

    #[test]
    fn given_out_of_range_breadcrumb_when_clicked_then_it_is_ignored() {
        let mut state =
            loaded_state(ListKind::Hierarchical, vec![folder("", "A")]);

        let _task = reduce(
            &mut state,
            ListBrowserCommand::BreadcrumbClicked {
                target: BreadcrumbTarget::Segment(4),
            },
            &ctx(),
        );

        assert_eq!(state.current_path(), "");
        assert_eq!(state.status(), LoadStatus::Ready);
    }

    #[test]
    fn given_sorted_view_when_list_changes_then_sort_is_reset() {
        let mut state =
            loaded_state(ListKind::Hierarchical, vec![folder("", "A")]);
        let _task = reduce(
            &mut state,
            ListBrowserCommand::SortColumnClicked {
                column: Column::Modified,
            },
            &ctx(),
        );
        assert_eq!(state.sort().column(), Some(Column::Modified));

        let _task = reduce(
            &mut state,
            ListBrowserCommand::SelectedListChanged {
                list_id: String::from("other"),
            },
            &ctx(),
        );

        assert_eq!(state.sort().column(), None);
        assert_eq!(state.current_path(), "");
    }

    #[test]
    fn given_drag_when_frames_tick_then_width_commits_once_per_frame() {
        let mut state = ListBrowserState::default();
        let commands = [
            ListBrowserCommand::ResizeStarted {
                column: Column::Title,
            },
            ListBrowserCommand::CursorMoved { x: 10.0 },
            ListBrowserCommand::CursorMoved { x: 40.0 },
            ListBrowserCommand::CursorMoved { x: 60.0 },
        ];
        for command in commands {
            let _task = reduce(&mut state, command, &ctx());
        }
        assert_eq!(state.columns().width(Column::Title), 300.0);

        let _task = reduce(&mut state, ListBrowserCommand::ResizeFrame, &ctx());
        assert_eq!(state.columns().width(Column::Title), 350.0);

        let _task =
            reduce(&mut state, ListBrowserCommand::ResizeReleased, &ctx());
        assert!(!state.is_resizing());
        assert_eq!(state.columns().width(Column::Title), 350.0);
    }

    #[test]
    fn given_pointer_seen_over_grip_when_drag_starts_then_first_move_counts() {
        let mut state = ListBrowserState::default();
        let commands = [
            ListBrowserCommand::GripEntered,
            ListBrowserCommand::CursorMoved { x: 400.0 },
            ListBrowserCommand::ResizeStarted {
                column: Column::Title,
            },
            ListBrowserCommand::CursorMoved { x: 430.0 },
            ListBrowserCommand::ResizeFrame,
        ];
        for command in commands {
            let _task = reduce(&mut state, command, &ctx());
        }

        assert_eq!(state.columns().width(Column::Title), 330.0);
    }

    #[test]
    fn given_grip_reentered_when_drag_starts_then_old_position_is_ignored() {
        let mut state = ListBrowserState::default();
        let commands = [
            ListBrowserCommand::GripEntered,
            ListBrowserCommand::CursorMoved { x: 900.0 },
            ListBrowserCommand::GripExited,
            ListBrowserCommand::GripEntered,
            ListBrowserCommand::ResizeStarted {
                column: Column::Title,
            },
            ListBrowserCommand::CursorMoved { x: 400.0 },
            ListBrowserCommand::CursorMoved { x: 420.0 },
            ListBrowserCommand::ResizeReleased,
        ];
        for command in commands {
            let _task = reduce(&mut state, command, &ctx());
        }

        assert_eq!(state.columns().width(Column::Title), 320.0);
    }

    #[test]
    fn given_release_before_frame_when_reduced_then_final_width_is_committed()
    {
        let mut state = ListBrowserState::default();
        let commands = [
            ListBrowserCommand::ResizeStarted {
                column: Column::Author,
            },
            ListBrowserCommand::CursorMoved { x: 200.0 },
            ListBrowserCommand::CursorMoved { x: 0.0 },
            ListBrowserCommand::ResizeReleased,
        ];
        for command in commands {
            let _task = reduce(&mut state, command, &ctx());
        }

        assert_eq!(state.columns().width(Column::Author), 100.0);
        assert_eq!(state.resizing_column(), None);
    }
}
