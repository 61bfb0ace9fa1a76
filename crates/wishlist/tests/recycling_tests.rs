//! Integration tests driving adapters the way a scrolling list container does.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use wishlist::adapter::{ChildId, ListAdapter, RowBinder, RowView, SingleTypeAdapter, ViewIds};
use wishlist::inflate::{LayoutRegistry, RowTemplate};
use wishlist::view::{ImageView, LayoutId, TextView, View, ViewBuilder, ViewId, ViewKey};
use wishlist::{AdapterError, content_hash};

const ROW: LayoutId = LayoutId::new(1);
const TITLE: ChildId<TextView> = ChildId::new(10);
const ICON: ChildId<ImageView> = ChildId::new(20);

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("wishlist=trace")
        .with_test_writer()
        .try_init();
}

/// A layout with a title only; `ICON` is declared by binders but absent.
fn title_only_template() -> RowTemplate {
    let registry = LayoutRegistry::new();
    registry.register(ROW, || {
        ViewBuilder::group()
            .id(1)
            .child(ViewBuilder::group().child(ViewBuilder::text().id(TITLE)))
            .build()
    });
    RowTemplate::new(Arc::new(registry), ROW)
}

type Calls = Arc<Mutex<Vec<(usize, ViewKey, String)>>>;

struct TitleBinder {
    calls: Calls,
}

impl RowBinder<String> for TitleBinder {
    fn child_view_ids(&self) -> ViewIds {
        [TITLE.id(), ICON.id()].into()
    }

    fn update(&self, position: usize, row: &RowView<'_>, item: &String) {
        row.get(TITLE).set_text(item.as_str());
        self.calls.lock().push((position, row.row().key(), item.clone()));
    }
}

fn title_adapter() -> (SingleTypeAdapter<String, TitleBinder>, Calls) {
    let calls = Calls::default();
    let adapter = SingleTypeAdapter::new(
        title_only_template(),
        TitleBinder {
            calls: calls.clone(),
        },
    );
    (adapter, calls)
}

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item {i}")).collect()
}

fn title_of(row: &View) -> String {
    row.find_view_by_id(TITLE.id())
        .and_then(|view| view.as_text())
        .map(|text| text.text())
        .unwrap_or_default()
}

/// A minimal list container: shows a window of positions and keeps rows that
/// scroll out in a scrap pile for reuse.
struct ListHost {
    container: View,
    window: usize,
    first: usize,
    shown: BTreeMap<usize, View>,
    scrap: Vec<View>,
    changes: Arc<AtomicUsize>,
}

impl ListHost {
    fn attach<A: ListAdapter>(adapter: &A, window: usize) -> Self {
        let changes = Arc::new(AtomicUsize::new(0));
        let recv = changes.clone();
        adapter.signals().data_changed.connect(move |_| {
            recv.fetch_add(1, Ordering::SeqCst);
        });
        Self {
            container: ViewBuilder::group().build(),
            window,
            first: 0,
            shown: BTreeMap::new(),
            scrap: Vec::new(),
            changes,
        }
    }

    fn visible(&self, count: usize) -> Range<usize> {
        self.first..(self.first + self.window).min(count)
    }

    fn scroll_to<A: ListAdapter>(&mut self, adapter: &mut A, first: usize) -> wishlist::Result<()> {
        self.first = first;
        let wanted = self.visible(adapter.count());

        let stale: Vec<usize> = self
            .shown
            .keys()
            .copied()
            .filter(|position| !wanted.contains(position))
            .collect();
        for position in stale {
            if let Some(row) = self.shown.remove(&position) {
                self.scrap.push(row);
            }
        }

        for position in wanted {
            if !self.shown.contains_key(&position) {
                let row = self.bind(adapter, position)?;
                self.shown.insert(position, row);
            }
        }
        Ok(())
    }

    /// Binds one position, taking a scrap row only once the position is known
    /// to be valid so a failed call cannot lose it.
    fn bind<A: ListAdapter>(&mut self, adapter: &mut A, position: usize) -> wishlist::Result<View> {
        let count = adapter.count();
        if position >= count {
            return Err(AdapterError::out_of_bounds(position, count));
        }
        let recycled = self.scrap.pop();
        adapter.view_for(position, recycled, Some(&self.container))
    }

    /// Rebinds every visible row, as a container does after `data_changed`.
    fn refresh<A: ListAdapter>(&mut self, adapter: &mut A) -> wishlist::Result<()> {
        let rows = std::mem::take(&mut self.shown);
        self.scrap.extend(rows.into_values());
        self.scroll_to(adapter, self.first)
    }
}

#[test]
fn test_scrolling_inflates_one_window_of_rows() {
    setup();
    let (mut adapter, calls) = title_adapter();
    adapter.set_items(numbered(100));

    let mut host = ListHost::attach(&adapter, 5);
    for first in 0..=95 {
        host.scroll_to(&mut adapter, first).unwrap();
    }

    let stats = adapter.stats();
    assert_eq!(stats.rows_inflated, 5);
    assert_eq!(stats.rows_recycled, 95);
    assert_eq!(stats.child_lookups, 5 * 2);
    assert_eq!(stats.binds, 100);
    assert_eq!(calls.lock().len(), 100);

    let distinct_rows: std::collections::HashSet<ViewKey> =
        calls.lock().iter().map(|(_, key, _)| *key).collect();
    assert_eq!(distinct_rows.len(), 5);

    for (position, row) in &host.shown {
        assert_eq!(title_of(row), format!("item {position}"));
    }
}

#[test]
fn test_missing_declared_child_is_not_cached() {
    setup();
    let (mut adapter, calls) = title_adapter();
    adapter.set_items(vec!["A".to_string(), "B".to_string()]);

    let row = adapter.view_for(0, None, None).unwrap();
    let cache = adapter.child_cache(&row).unwrap();
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(TITLE.id()));
    assert!(!cache.contains(ICON.id()));
    let lookups = adapter.stats().child_lookups;

    let again = adapter.view_for(0, Some(row.clone()), None).unwrap();
    assert!(View::same(&again, &row));
    assert_eq!(adapter.stats().child_lookups, lookups);

    let calls = calls.lock();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], (0, row.key(), "A".to_string()));
}

#[test]
fn test_recycled_row_keeps_identical_children() {
    setup();
    let (mut adapter, _) = title_adapter();
    adapter.set_items(numbered(3));

    let row = adapter.view_for(0, None, None).unwrap();
    let before = adapter.child_cache(&row).unwrap().get(TITLE.id()).cloned().unwrap();

    for position in [1, 2, 0] {
        adapter.view_for(position, Some(row.clone()), None).unwrap();
        let after = adapter.child_cache(&row).unwrap().get(TITLE.id()).unwrap();
        assert!(View::same(after, &before));
    }

    let found = row.find_view_by_id(TITLE.id()).unwrap();
    assert!(View::same(&found, &before));
    assert_eq!(title_of(&row), "item 0");
}

#[test]
fn test_update_receives_item_at_position() {
    setup();
    let (mut adapter, calls) = title_adapter();
    adapter.set_items(numbered(4));

    let mut row = None;
    for position in [3, 1, 2, 0] {
        let view = adapter.view_for(position, row.take(), None).unwrap();
        row = Some(view);
    }

    let calls = calls.lock();
    assert_eq!(calls.len(), 4);
    for (position, _, item) in calls.iter() {
        assert_eq!(item, adapter.item(*position));
    }
}

#[test]
fn test_set_items_empty_notifies_once() {
    setup();
    let (mut adapter, _) = title_adapter();
    adapter.set_items(numbered(3));
    let host = ListHost::attach(&adapter, 5);

    adapter.set_items(Vec::new());
    assert_eq!(adapter.count(), 0);
    assert_eq!(host.changes.load(Ordering::SeqCst), 1);

    adapter.set_items(numbered(1));
    adapter.set_items(None::<String>);
    assert_eq!(adapter.count(), 0);
    assert_eq!(host.changes.load(Ordering::SeqCst), 3);
}

#[test]
fn test_refresh_after_replace_rebinds_without_inflating() {
    setup();
    let (mut adapter, _) = title_adapter();
    adapter.set_items(numbered(10));

    let mut host = ListHost::attach(&adapter, 3);
    host.scroll_to(&mut adapter, 0).unwrap();
    assert_eq!(adapter.stats().rows_inflated, 3);

    adapter.set_items((0..10).map(|i| format!("renamed {i}")));
    assert_eq!(host.changes.load(Ordering::SeqCst), 1);
    host.refresh(&mut adapter).unwrap();

    assert_eq!(adapter.stats().rows_inflated, 3);
    for (position, row) in &host.shown {
        assert_eq!(title_of(row), format!("renamed {position}"));
    }
}

#[test]
fn test_shrinking_items_leaves_out_of_range_positions_failing() {
    setup();
    let (mut adapter, _) = title_adapter();
    adapter.set_items(numbered(5));
    let row = adapter.view_for(4, None, None).unwrap();

    adapter.set_items(numbered(2));
    assert_eq!(
        adapter.view_for(4, Some(row), None),
        Err(AdapterError::out_of_bounds(4, 2))
    );
}

#[test]
fn test_out_of_range_bind_keeps_scrap_row() {
    setup();
    let (mut adapter, _) = title_adapter();
    adapter.set_items(numbered(2));

    let mut host = ListHost::attach(&adapter, 2);
    host.scroll_to(&mut adapter, 0).unwrap();
    let row = host.shown.remove(&1).unwrap();
    let weak = row.downgrade();
    host.scrap.push(row);

    assert_eq!(
        host.bind(&mut adapter, 7),
        Err(AdapterError::out_of_bounds(7, 2))
    );
    assert_eq!(host.scrap.len(), 1);
    assert!(weak.is_alive());

    let rebound = host.bind(&mut adapter, 1).unwrap();
    assert!(host.scrap.is_empty());
    assert_eq!(rebound.key(), weak.upgrade().unwrap().key());
}

struct CountingBinder {
    initialized: Arc<AtomicUsize>,
}

impl RowBinder<String> for CountingBinder {
    fn child_view_ids(&self) -> ViewIds {
        [TITLE.id()].into()
    }

    fn initialize(&self, row: &RowView<'_>) {
        row.get(TITLE).set_text("loading");
        self.initialized.fetch_add(1, Ordering::SeqCst);
    }

    fn update(&self, _position: usize, row: &RowView<'_>, item: &String) {
        row.get(TITLE).set_text(item.as_str());
    }
}

#[test]
fn test_initialize_runs_once_per_physical_row() {
    setup();
    let initialized = Arc::new(AtomicUsize::new(0));
    let mut adapter = SingleTypeAdapter::new(
        title_only_template(),
        CountingBinder {
            initialized: initialized.clone(),
        },
    );
    adapter.set_items(numbered(40));

    let mut host = ListHost::attach(&adapter, 4);
    for first in 0..=36 {
        host.scroll_to(&mut adapter, first).unwrap();
    }
    host.refresh(&mut adapter).unwrap();

    assert_eq!(initialized.load(Ordering::SeqCst), 4);
    assert_eq!(adapter.stats().rows_inflated, 4);
    for (position, row) in &host.shown {
        assert_eq!(title_of(row), format!("item {position}"));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Bucketed {
    bucket: u8,
    label: &'static str,
}

impl Hash for Bucketed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bucket.hash(state);
    }
}

#[test]
fn test_item_ids_are_content_hashes_and_may_collide() {
    setup();
    let mut adapter = SingleTypeAdapter::with_fn(
        title_only_template(),
        [TITLE.id()],
        |_, row, item: &Bucketed| {
            row.get(TITLE).set_text(item.label);
        },
    );
    let items = vec![
        Bucketed { bucket: 1, label: "first" },
        Bucketed { bucket: 1, label: "second" },
        Bucketed { bucket: 2, label: "third" },
    ];
    adapter.set_items(items.clone());

    for (position, item) in items.iter().enumerate() {
        assert_eq!(adapter.item(position), item);
        assert_eq!(ListAdapter::item_id(&adapter, position), content_hash(item));
    }
    assert_ne!(adapter.item(0), adapter.item(1));
    assert_eq!(adapter.item_id(0), adapter.item_id(1));
    assert!(!adapter.has_stable_ids());
}

#[test]
#[should_panic(expected = "child view #10 is a text view, expected image")]
fn test_binder_type_mismatch_panics() {
    let mut adapter = SingleTypeAdapter::with_fn(
        title_only_template(),
        [TITLE.id()],
        |_, row, _: &String| {
            row.image_view(TITLE.id());
        },
    );
    adapter.set_items(vec!["A".to_string()]);
    let _ = adapter.view_for(0, None, None);
}

#[test]
fn test_try_get_tolerates_missing_child() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recv = seen.clone();
    let mut adapter = SingleTypeAdapter::with_fn(
        title_only_template(),
        [TITLE.id(), ICON.id()],
        move |_, row, _: &String| {
            recv.lock().push(row.try_get::<ImageView>(ICON.id()).is_ok());
        },
    );
    adapter.set_items(vec!["A".to_string()]);
    let row = adapter.view_for(0, None, None).unwrap();

    assert_eq!(*seen.lock(), vec![false]);
    assert!(!adapter.child_cache(&row).unwrap().contains(ViewId::new(20)));
}

#[cfg(debug_assertions)]
#[test]
fn test_adapter_used_from_other_thread_panics() {
    let (adapter, _) = title_adapter();
    let result = std::thread::spawn(move || {
        let mut adapter = adapter;
        adapter.set_items(numbered(1));
    })
    .join();
    assert!(result.is_err());
}
