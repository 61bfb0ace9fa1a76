//! Wishlist Contacts Example
//!
//! Scrolls a contact list through a small window of rows and prints what is
//! on screen after each step, along with the adapter's work counters:
//! - Rows are inflated only until the window is full
//! - Rows leaving the window are handed back and rebound
//! - Replacing the items notifies the list, which rebinds in place
//!
//! Run with: cargo run -p wishlist --example contacts
//! Set `RUST_LOG=wishlist=trace` to see every bind.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::EnvFilter;
use wishlist::adapter::{ChildId, ListAdapter, RowBinder, RowView, SingleTypeAdapter, ViewIds};
use wishlist::inflate::LayoutRegistry;
use wishlist::view::{ImageSource, ImageView, LayoutId, TextView, View, ViewBuilder, Visibility};

const CONTACT_ROW: LayoutId = LayoutId::new(1);

const NAME: ChildId<TextView> = ChildId::new(10);
const EMAIL: ChildId<TextView> = ChildId::new(11);
const AVATAR: ChildId<ImageView> = ChildId::new(20);
const STAR: ChildId<ImageView> = ChildId::new(21);

const STAR_ICON: u32 = 0x7f02_0001;

#[derive(Debug, Clone, Hash)]
struct Contact {
    name: String,
    email: String,
    avatar: Option<String>,
    starred: bool,
}

impl Contact {
    fn new(name: &str, starred: bool) -> Self {
        let login = name.to_lowercase().replace(' ', ".");
        Self {
            name: name.to_string(),
            email: format!("{login}@example.com"),
            avatar: starred.then(|| format!("https://avatars.example.com/{login}.png")),
            starred,
        }
    }
}

struct ContactBinder;

impl RowBinder<Contact> for ContactBinder {
    fn child_view_ids(&self) -> ViewIds {
        [NAME.id(), EMAIL.id(), AVATAR.id(), STAR.id()].into()
    }

    fn update(&self, _position: usize, row: &RowView<'_>, contact: &Contact) {
        row.get(NAME).set_text(contact.name.as_str());
        row.get(EMAIL).set_text(contact.email.as_str());
        row.get(AVATAR)
            .set_image(contact.avatar.as_deref().map(ImageSource::from));
        row.set_visible(STAR, contact.starred);
    }
}

fn contact_row() -> View {
    ViewBuilder::group()
        .child(ViewBuilder::image().id(AVATAR))
        .child(
            ViewBuilder::group()
                .child(ViewBuilder::text().id(NAME))
                .child(ViewBuilder::text().id(EMAIL)),
        )
        .child(ViewBuilder::image().id(STAR).with_image(STAR_ICON))
        .build()
}

fn describe(row: &View) -> String {
    let text = |child: ChildId<TextView>| {
        row.find_view_by_id(child.id())
            .and_then(|view| view.as_text())
            .map(|view| view.text())
            .unwrap_or_default()
    };
    let starred = row
        .find_view_by_id(STAR.id())
        .is_some_and(|star| star.visibility() == Visibility::Visible);
    format!(
        "{:<16} {:<28} {}",
        text(NAME),
        text(EMAIL),
        if starred { "*" } else { "" }
    )
}

/// Shows `window` consecutive positions and recycles rows that scroll out.
struct ListWindow {
    list: View,
    window: usize,
    first: usize,
    rows: VecDeque<View>,
    dirty: Arc<AtomicBool>,
}

impl ListWindow {
    fn new<A: ListAdapter>(adapter: &A, window: usize) -> Self {
        let dirty = Arc::new(AtomicBool::new(false));
        let flag = dirty.clone();
        adapter.signals().data_changed.connect(move |_| {
            flag.store(true, Ordering::SeqCst);
        });
        Self {
            list: ViewBuilder::group().build(),
            window,
            first: 0,
            rows: VecDeque::new(),
            dirty,
        }
    }

    fn fill<A: ListAdapter>(&mut self, adapter: &mut A) -> wishlist::Result<()> {
        let end = (self.first + self.window).min(adapter.count());
        for position in self.first + self.rows.len()..end {
            let row = adapter.view_for(position, None, Some(&self.list))?;
            self.rows.push_back(row);
        }
        Ok(())
    }

    fn scroll_down<A: ListAdapter>(&mut self, adapter: &mut A) -> wishlist::Result<bool> {
        let last = self.first + self.rows.len();
        if last >= adapter.count() {
            return Ok(false);
        }
        let recycled = self.rows.pop_front();
        let row = adapter.view_for(last, recycled, Some(&self.list))?;
        self.rows.push_back(row);
        self.first += 1;
        Ok(true)
    }

    fn rebind_if_changed<A: ListAdapter>(&mut self, adapter: &mut A) -> wishlist::Result<()> {
        if !self.dirty.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        self.first = self.first.min(adapter.count().saturating_sub(self.window));
        let old = std::mem::take(&mut self.rows);
        for (offset, recycled) in old.into_iter().enumerate() {
            let position = self.first + offset;
            if position >= adapter.count() {
                break;
            }
            let row = adapter.view_for(position, Some(recycled), Some(&self.list))?;
            self.rows.push_back(row);
        }
        self.fill(adapter)
    }

    fn print(&self, title: &str) {
        println!("-- {title} (positions {}..{})", self.first, self.first + self.rows.len());
        for row in &self.rows {
            println!("   {}", describe(row));
        }
    }
}

fn main() -> wishlist::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wishlist=info")))
        .init();

    let layouts = LayoutRegistry::new();
    layouts.register(CONTACT_ROW, contact_row);

    let mut adapter =
        SingleTypeAdapter::with_inflater(Arc::new(layouts), CONTACT_ROW, ContactBinder);
    adapter.set_items(
        [
            ("Ada Lovelace", true),
            ("Alan Turing", false),
            ("Barbara Liskov", true),
            ("Dennis Ritchie", false),
            ("Edsger Dijkstra", false),
            ("Grace Hopper", true),
            ("Ken Thompson", false),
            ("Margaret Hamilton", true),
        ]
        .into_iter()
        .map(|(name, starred)| Contact::new(name, starred)),
    );

    let mut window = ListWindow::new(&adapter, 3);
    window.fill(&mut adapter)?;
    window.print("initial");

    while window.scroll_down(&mut adapter)? {
        window.print("scrolled");
    }

    let starred: Vec<Contact> = adapter.items().iter().filter(|c| c.starred).cloned().collect();
    adapter.set_items(starred);
    window.rebind_if_changed(&mut adapter)?;
    window.print("starred only");

    let stats = adapter.stats();
    println!(
        "inflated {} rows, recycled {} times, {} child lookups, {} binds",
        stats.rows_inflated, stats.rows_recycled, stats.child_lookups, stats.binds
    );
    for position in 0..adapter.count() {
        println!("   id {:016x}  {}", adapter.item_id(position), adapter.item(position).name);
    }

    Ok(())
}
