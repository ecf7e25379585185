//! Terminal runtime for the display widget.
//!
//! The underlying drawing primitive does not fetch anything by itself,
//! so the runtime triggers the fetch explicitly when the widget mounts.
//! `r` re-mounts the widget (the only retry path), `q`/Esc quits.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::Terminal;

use crate::client::ViewCounterClient;
use crate::widget::mvi::Reducer;
use crate::widget::reducer::{CounterIntent, CounterReducer};
use crate::widget::state::CountState;
use crate::widget::terminal_guard::setup_terminal;
use crate::widget::view::ViewCounter;

pub struct WatchOptions {
    pub slug: String,
    /// Count this mount as a view (gated per session) instead of a
    /// plain read.
    pub increment: bool,
}

pub async fn run(client: &ViewCounterClient, options: &WatchOptions) -> anyhow::Result<()> {
    let (mut terminal, _guard) = setup_terminal()?;
    let view = ViewCounter::new(options.slug.clone());

    // Mount: reset to pending, then fetch exactly once.
    let mut state = CounterReducer::reduce(CountState::default(), CounterIntent::Mounted);
    draw(&mut terminal, &view, &state)?;
    state = fetch(client, options, state).await;
    draw(&mut terminal, &view, &state)?;

    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('r') => {
                    state = CounterReducer::reduce(state, CounterIntent::Mounted);
                    draw(&mut terminal, &view, &state)?;
                    state = fetch(client, options, state).await;
                    draw(&mut terminal, &view, &state)?;
                }
                _ => {}
            },
            Event::Resize(_, _) => draw(&mut terminal, &view, &state)?,
            _ => {}
        }
    }

    Ok(())
}

async fn fetch(
    client: &ViewCounterClient,
    options: &WatchOptions,
    state: CountState,
) -> CountState {
    let count = if options.increment {
        client.increment_view_count(&options.slug).await
    } else {
        client.get_view_count(&options.slug).await
    };
    // The client collapses failures to 0, so from here every fetch
    // completes; see CounterIntent::FetchFailed for the stricter path.
    CounterReducer::reduce(state, CounterIntent::FetchCompleted { count })
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    view: &ViewCounter,
    state: &CountState,
) -> std::io::Result<()> {
    terminal.draw(|frame| {
        let [area] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [area] = Layout::horizontal([Constraint::Max(60)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(view.widget(state), area);
    })?;
    Ok(())
}
