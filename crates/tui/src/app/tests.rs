use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stockr_api::{ApiError, MemoryProductsApi, ProductField};

use super::App;
use crate::config::UiSettings;
use crate::requests::{QueryKind, QueryOutcome, RequestResult};
use crate::view::{ErrorOrigin, ModalKind, ModalTimings};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

fn settings() -> UiSettings {
	UiSettings {
		timings: ModalTimings {
			open: Duration::ZERO,
			close: Duration::from_millis(400),
		},
		..UiSettings::default()
	}
}

fn seeded() -> Arc<MemoryProductsApi> {
	Arc::new(MemoryProductsApi::with_products([
		("Widget", 2.5, 10),
		("Gadget", 9.0, 3),
		("Blue widget", 4.0, 7),
	]))
}

fn app_with(api: &Arc<MemoryProductsApi>) -> App<'static> {
	App::new(Box::new(Arc::clone(api)), settings())
}

/// Pump results until every request has been answered.
fn settle(app: &mut App<'_>) {
	let deadline = Instant::now() + SETTLE_TIMEOUT;
	while app.is_busy() {
		assert!(Instant::now() < deadline, "requests did not settle");
		app.pump_request_results();
		thread::sleep(Duration::from_millis(2));
	}
}

/// Let any close animation finish.
fn finish_animations(app: &mut App<'_>) {
	app.tick(Instant::now() + Duration::from_secs(1));
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App<'_>, text: &str) {
	for c in text.chars() {
		app.handle_key(key(KeyCode::Char(c)));
	}
}

fn names(app: &App<'_>) -> Vec<String> {
	app.store
		.products()
		.iter()
		.map(|product| product.name.clone())
		.collect()
}

fn buffer_to_string(buffer: &Buffer) -> String {
	let width = buffer.area.width as usize;
	buffer
		.content
		.chunks(width)
		.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn list_all_replaces_the_snapshot() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	assert!(app.view.loading);
	settle(&mut app);

	assert!(!app.view.loading);
	assert_eq!(names(&app), vec!["Widget", "Gadget", "Blue widget"]);
	assert_eq!(app.view.table_state.selected(), Some(0));
}

#[test]
fn startup_runs_the_initial_query() {
	let api = seeded();
	let mut app = App::new(
		Box::new(Arc::clone(&api)),
		UiSettings {
			initial_query: "widget".into(),
			..settings()
		},
	);
	app.load_initial();
	settle(&mut app);
	assert_eq!(names(&app), vec!["Widget", "Blue widget"]);

	let mut blank = app_with(&api);
	blank.load_initial();
	settle(&mut blank);
	assert_eq!(blank.store.len(), 3);
	assert_eq!(
		api.requests(),
		vec!["GET /products/search?name=widget", "GET /products"]
	);
}

#[test]
fn theme_changes_replace_the_style() {
	let api = seeded();
	let mut app = app_with(&api);
	app.set_theme(crate::style::LIGHT);
	assert_eq!(app.style.theme, crate::style::LIGHT);
}

#[test]
fn fetch_failure_clears_the_list_and_reports() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);

	api.fail_with(Some(500));
	app.list_all();
	settle(&mut app);

	assert!(app.store.is_empty());
	let report = app.view.error.clone().unwrap();
	assert_eq!(report.origin, ErrorOrigin::Query);
	assert_eq!(report.message, "Failed to fetch products");
	assert!(render(&mut app).contains("Error: Failed to fetch products"));
}

#[test]
fn search_dispatches_on_the_query_shape() {
	let api = seeded();
	let mut app = app_with(&api);

	type_text(&mut app, " 2 ");
	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);
	assert_eq!(names(&app), vec!["Gadget"]);

	app.view.search_input = crate::input::QueryInput::new("WIDGET");
	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);
	assert_eq!(names(&app), vec!["Widget", "Blue widget"]);

	app.view.search_input = crate::input::QueryInput::new("   ");
	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);
	assert_eq!(app.store.len(), 3);

	assert_eq!(
		api.requests(),
		vec![
			"GET /products/2",
			"GET /products/search?name=WIDGET",
			"GET /products",
		]
	);
}

#[test]
fn unknown_id_reports_not_found() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);

	type_text(&mut app, "42");
	app.search();
	settle(&mut app);

	assert!(app.store.is_empty());
	assert_eq!(app.view.error.as_ref().unwrap().message, "Product not found");
}

#[test]
fn search_failures_name_the_search_kind() {
	let api = seeded();
	api.fail_with(Some(503));
	let mut app = app_with(&api);

	type_text(&mut app, "7");
	app.search();
	settle(&mut app);
	assert_eq!(
		app.view.error.as_ref().unwrap().message,
		"Failed to fetch product by id"
	);

	app.view.search_input = crate::input::QueryInput::new("gadget");
	app.search();
	settle(&mut app);
	assert_eq!(
		app.view.error.as_ref().unwrap().message,
		"Failed to search products by name"
	);
}

#[test]
fn a_new_query_clears_the_previous_error() {
	let api = seeded();
	api.fail_with(Some(500));
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);
	assert!(app.view.error.is_some());

	api.fail_with(None);
	app.handle_key(ctrl('r'));
	assert!(app.view.error.is_none());
	settle(&mut app);
	assert_eq!(app.store.len(), 3);
}

#[test]
fn stale_query_results_are_ignored() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);
	app.toggle_order();

	// Results for the first listing arriving after the re-sort was issued.
	app.handle_request_result(RequestResult::Query {
		id: 1,
		kind: QueryKind::All,
		outcome: Ok(QueryOutcome::Products(Vec::new())),
	});
	app.handle_request_result(RequestResult::Query {
		id: 1,
		kind: QueryKind::All,
		outcome: Err(ApiError::Status {
			method: "GET",
			url: "/products".into(),
			status: 500,
		}),
	});

	assert_eq!(names(&app), vec!["Widget", "Gadget", "Blue widget"]);
	assert!(app.view.error.is_none());
	assert!(app.view.loading);
	assert!(app.is_busy());

	settle(&mut app);
	assert!(!app.view.loading);
	assert!(app.store.is_ordered());
	assert_eq!(names(&app), vec!["Gadget", "Blue widget", "Widget"]);
}

#[test]
fn sort_toggle_alternates_listings() {
	let api = seeded();
	let mut app = app_with(&api);

	app.handle_key(ctrl('o'));
	settle(&mut app);
	assert!(app.store.is_ordered());
	assert!(render(&mut app).contains("by quantity"));

	app.handle_key(ctrl('o'));
	settle(&mut app);
	assert!(!app.store.is_ordered());
	assert_eq!(names(&app), vec!["Widget", "Gadget", "Blue widget"]);

	api.fail_with(Some(500));
	app.toggle_order();
	settle(&mut app);
	assert_eq!(
		app.view.error.as_ref().unwrap().message,
		"Failed to fetch ordered products"
	);
}

#[test]
fn adding_a_product_refreshes_and_closes() {
	let api = seeded();
	let mut app = app_with(&api);
	app.handle_key(ctrl('a'));
	assert_eq!(app.view.active_modal(), Some(ModalKind::Add));

	type_text(&mut app, "Gizmo");
	app.handle_key(key(KeyCode::Tab));
	type_text(&mut app, "1x2.5");
	app.handle_key(key(KeyCode::Tab));
	type_text(&mut app, "4");
	assert_eq!(app.view.add.values.price, "12.5");

	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);

	assert!(app.view.modal(ModalKind::Add).animation.is_closing());
	assert_eq!(app.store.len(), 4);
	assert_eq!(api.snapshot()[3].price, 12.5);
	finish_animations(&mut app);
	assert!(!app.view.any_modal_visible());
}

#[test]
fn failed_mutation_keeps_the_form_open() {
	let api = seeded();
	let mut app = app_with(&api);
	app.open_modal(ModalKind::Add);
	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);

	assert_eq!(app.view.active_modal(), Some(ModalKind::Add));
	let report = app.view.modal_error(ModalKind::Add).unwrap();
	assert_eq!(report.message, "Failed to add product (HTTP 400)");
	assert!(app.view.table_error().is_none());
	assert!(render(&mut app).contains("Error: Failed to add product (HTTP 400)"));
}

#[test]
fn closing_a_failed_form_restores_the_table() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);

	app.open_modal(ModalKind::Add);
	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);
	assert!(app.view.modal_error(ModalKind::Add).is_some());

	app.handle_key(key(KeyCode::Esc));
	finish_animations(&mut app);

	assert!(app.view.error.is_none());
	let screen = render(&mut app);
	assert!(screen.contains("Widget"), "{screen}");
	assert!(screen.contains("Blue widget"), "{screen}");
	assert!(!screen.contains("Failed to add product"), "{screen}");
	assert_eq!(app.outcome().last_error, None);
}

#[test]
fn deleting_shows_a_preview_then_removes() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);

	app.handle_key(ctrl('d'));
	type_text(&mut app, "9");
	assert!(render(&mut app).contains("Product not found"));

	app.handle_key(key(KeyCode::Backspace));
	type_text(&mut app, "2");
	let screen = render(&mut app);
	assert!(screen.contains("Gadget"));
	assert!(screen.contains("$9.00"));

	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);
	assert_eq!(names(&app), vec!["Widget", "Blue widget"]);
	assert_eq!(api.requests().last().unwrap(), "GET /products");
}

#[test]
fn blank_id_is_rejected_locally() {
	let api = seeded();
	let mut app = app_with(&api);
	app.open_modal(ModalKind::Delete);
	app.handle_key(key(KeyCode::Enter));

	assert!(!app.is_busy());
	assert!(api.requests().is_empty());
	assert_eq!(
		app.view.modal_error(ModalKind::Delete).unwrap().message,
		"Enter a product id"
	);
}

#[test]
fn numeric_fields_reject_letters() {
	let api = seeded();
	let mut app = app_with(&api);
	app.open_modal(ModalKind::Delete);
	type_text(&mut app, "a1b2");
	assert_eq!(app.view.delete.id, "12");
}

#[test]
fn update_sends_only_checked_fields() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);

	app.handle_key(ctrl('u'));
	type_text(&mut app, "1");
	assert_eq!(app.view.update.value(ProductField::Price), "2.5");

	// Id -> Name toggle -> Price toggle
	app.handle_key(key(KeyCode::Tab));
	app.handle_key(key(KeyCode::Tab));
	app.handle_key(key(KeyCode::Char(' ')));
	assert!(app.view.update.is_checked(ProductField::Price));

	app.handle_key(key(KeyCode::Tab));
	app.handle_key(key(KeyCode::Backspace));
	app.handle_key(key(KeyCode::Backspace));
	app.handle_key(key(KeyCode::Backspace));
	type_text(&mut app, "3.75");

	let screen = render(&mut app);
	assert!(screen.contains("Current"));
	assert!(screen.contains("3.75"));

	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);

	let widget = &api.snapshot()[0];
	assert_eq!(widget.price, 3.75);
	assert_eq!(widget.name, "Widget");
	assert_eq!(widget.quantity, 10);
	assert!(app.view.modal(ModalKind::Update).animation.is_closing());
}

#[test]
fn unchecking_restores_the_original_value() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);

	app.open_modal(ModalKind::Update);
	type_text(&mut app, "2");
	app.handle_key(key(KeyCode::Tab));
	app.handle_key(key(KeyCode::Char(' ')));
	app.handle_key(key(KeyCode::Tab));
	type_text(&mut app, " Pro");
	assert_eq!(app.view.update.value(ProductField::Name), "Gadget Pro");

	app.handle_key(key(KeyCode::BackTab));
	app.handle_key(key(KeyCode::Char(' ')));
	assert_eq!(app.view.update.value(ProductField::Name), "Gadget");
}

#[test]
fn escape_closes_the_modal_before_quitting() {
	let api = seeded();
	let mut app = app_with(&api);
	app.open_modal(ModalKind::Add);

	assert!(app.handle_key(key(KeyCode::Esc)).is_none());
	assert!(app.view.modal(ModalKind::Add).animation.is_closing());
	assert!(app.handle_key(key(KeyCode::Esc)).is_none());

	finish_animations(&mut app);
	let outcome = app.handle_key(key(KeyCode::Esc)).unwrap();
	assert_eq!(outcome.products_shown, 0);
}

#[test]
fn reopening_during_close_cancels_it() {
	let api = seeded();
	let mut app = app_with(&api);
	app.open_modal(ModalKind::Delete);
	app.close_modal(ModalKind::Delete);
	app.open_modal(ModalKind::Delete);
	finish_animations(&mut app);

	assert_eq!(app.view.active_modal(), Some(ModalKind::Delete));
}

#[test]
fn loading_message_replaces_the_table() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	assert!(render(&mut app).contains("Loading products..."));
	settle(&mut app);

	let screen = render(&mut app);
	assert!(screen.contains("Blue widget"));
	assert!(screen.contains("$2.50"));
	assert!(screen.contains("3 products"));
}

#[test]
fn navigation_stays_inside_the_list() {
	let api = seeded();
	let mut app = app_with(&api);
	app.list_all();
	settle(&mut app);

	app.handle_key(key(KeyCode::End));
	assert_eq!(app.view.table_state.selected(), Some(2));
	app.handle_key(key(KeyCode::Down));
	assert_eq!(app.view.table_state.selected(), Some(2));
	app.handle_key(key(KeyCode::PageUp));
	assert_eq!(app.view.table_state.selected(), Some(0));
	app.handle_key(key(KeyCode::PageDown));
	assert_eq!(app.view.table_state.selected(), Some(2));
	app.handle_key(key(KeyCode::Home));
	assert_eq!(app.view.table_state.selected(), Some(0));
}

#[test]
fn ctrl_c_always_quits() {
	let api = seeded();
	let mut app = app_with(&api);
	app.open_modal(ModalKind::Update);
	let outcome = app.handle_key(ctrl('c')).unwrap();
	assert_eq!(outcome.last_error, None);
}
