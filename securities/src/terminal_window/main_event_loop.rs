// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::{sync::mpsc::{self, Sender, UnboundedReceiver},
            task::JoinHandle};

use crate::{AcknowledgePrompt, AppConfig, BenchmarkPhase, CommonResult, InputDevice,
            InteractionHandler, ItemStore, MainThreadSignal, OutputDevice, PaintStats,
            RawMode, RowChange, Size, TerminalListView, ok};

pub const CHANNEL_WIDTH: usize = 1_000;

/// Set to `true` to trace every input event the loop receives.
pub const DEBUG_MAIN_EVENT_LOOP: bool = false;

/// What the session looked like when the main event loop exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub benchmark_phase: BenchmarkPhase,
    pub checked_count: usize,
    pub total_count: usize,
    pub paint_stats: PaintStats,
}

#[derive(Debug)]
pub struct TerminalWindow;

impl TerminalWindow {
    /// Runs the list view until the user quits or the input stream ends.
    ///
    /// The terminal is put in raw mode on entry, and restored on the way out even when
    /// the loop fails. Any benchmark timers still pending are aborted.
    ///
    /// # Errors
    ///
    /// Returns an error if painting to `output_device` fails, or the terminal can't be
    /// switched in or out of raw mode.
    pub async fn main_event_loop(
        config: AppConfig,
        mut input_device: InputDevice,
        output_device: OutputDevice,
        initial_size: Size,
    ) -> CommonResult<SessionSummary> {
        // mpsc channel to send signals from the benchmark timers (and the input handlers)
        // to the main event loop.
        let (main_thread_channel_sender, mut main_thread_channel_receiver) =
            mpsc::channel::<MainThreadSignal>(CHANNEL_WIDTH);

        RawMode::start(&output_device)?;

        let mut window_state = WindowState::new(
            config,
            output_device.clone(),
            initial_size,
            main_thread_channel_sender,
        );

        let loop_result = window_state
            .run(&mut input_device, &mut main_thread_channel_receiver)
            .await;

        window_state.abort_timers();
        let end_result = RawMode::end(&output_device);

        loop_result?;
        end_result?;

        tracing::info!(summary = ?window_state.summary(), "main_event_loop -> Shutdown 🛑");

        ok!(window_state.summary())
    }
}

struct WindowState {
    config: AppConfig,
    store: ItemStore,
    /// Only present for an observable store.
    row_changes: Option<UnboundedReceiver<RowChange>>,
    view: TerminalListView,
    interaction: InteractionHandler,
    benchmark_phase: BenchmarkPhase,
    prompt: Option<AcknowledgePrompt>,
    main_thread_channel_sender: Sender<MainThreadSignal>,
    timers: Vec<JoinHandle<()>>,
}

mod lifecycle {
    use tokio::sync::mpsc::{Receiver, Sender};

    use super::{DEBUG_MAIN_EVENT_LOOP, SessionSummary, WindowState};
    use crate::{AppConfig, BenchmarkPhase, CommonResult, Continuation, InputDevice,
                InteractionHandler, ItemStore, MainThreadSignal, OutputDevice, Size,
                TerminalListView, VirtualList, call_if_true, ok, start_benchmark_task};

    impl WindowState {
        pub(super) fn new(
            config: AppConfig,
            output_device: OutputDevice,
            initial_size: Size,
            main_thread_channel_sender: Sender<MainThreadSignal>,
        ) -> Self {
            let mut store = ItemStore::initialize(config.item_count, config.store_mode);
            let row_changes = store.subscribe();
            Self {
                store,
                row_changes,
                view: TerminalListView::new(output_device, config.layout, initial_size),
                interaction: InteractionHandler::new(config.layout),
                benchmark_phase: BenchmarkPhase::default(),
                prompt: None,
                main_thread_channel_sender,
                timers: vec![],
                config,
            }
        }

        pub(super) async fn run(
            &mut self,
            input_device: &mut InputDevice,
            main_thread_channel_receiver: &mut Receiver<MainThreadSignal>,
        ) -> CommonResult<()> {
            // First paint, then start the clock on the benchmark.
            self.view.clear_and_refresh(&VirtualList::new(&self.store))?;
            self.timers.push(start_benchmark_task(
                self.config.benchmark,
                self.main_thread_channel_sender.clone(),
            ));

            tracing::info!(
                items = self.store.count(),
                mode = %self.store.mode(),
                policy = %self.config.benchmark.policy,
                "main_event_loop -> Startup 🚀"
            );

            loop {
                tokio::select! {
                    // Cancel safe since recv is cancel safe.
                    maybe_signal = main_thread_channel_receiver.recv() => {
                        let Some(signal) = maybe_signal else { break };
                        if self.handle_signal(signal)? == Continuation::Exit {
                            break;
                        }
                    }

                    // Cancel safe since no state is held in the future between polls.
                    maybe_input_event = input_device.next_input_event() => {
                        let Some(input_event) = maybe_input_event else {
                            tracing::info!("main_event_loop -> input stream ended");
                            break;
                        };
                        call_if_true!(DEBUG_MAIN_EVENT_LOOP, {
                            tracing::debug!(?input_event, "main_event_loop -> Tick: ⏰");
                        });
                        self.handle_input_event(input_event)?;
                    }
                }
            }

            ok!()
        }

        pub(super) fn abort_timers(&mut self) {
            for timer in self.timers.drain(..) {
                timer.abort();
            }
        }

        pub(super) fn summary(&self) -> SessionSummary {
            SessionSummary {
                benchmark_phase: self.benchmark_phase,
                checked_count: self.store.checked_count(),
                total_count: self.store.count(),
                paint_stats: self.view.stats,
            }
        }
    }
}

mod signals {
    use super::WindowState;
    use crate::{AcknowledgePrompt, BenchmarkReport, CommonResult, Continuation,
                MainThreadSignal, VirtualList, ok, run_bulk_update, schedule_report,
                set_window_title_to_now};

    impl WindowState {
        pub(super) fn handle_signal(
            &mut self,
            signal: MainThreadSignal,
        ) -> CommonResult<Continuation> {
            match signal {
                MainThreadSignal::Exit => return ok!(Continuation::Exit),
                MainThreadSignal::Render => self.repaint()?,
                MainThreadSignal::RunBulkUpdate => self.run_benchmark()?,
                MainThreadSignal::ShowReport(report) => self.show_report(report)?,
            }
            ok!(Continuation::Continue)
        }

        fn repaint(&mut self) -> CommonResult<()> {
            self.view.clear_and_refresh(&VirtualList::new(&self.store))?;
            if let Some(prompt) = &self.prompt {
                prompt.paint(&self.view.output_device, self.view.window_size)?;
            }
            ok!()
        }

        fn run_benchmark(&mut self) -> CommonResult<()> {
            if !self.benchmark_phase.can_run() {
                return ok!();
            }

            set_window_title_to_now(&self.view.output_device)?;
            let report = run_bulk_update(
                &mut self.store,
                self.config.benchmark.policy,
                &mut self.view,
            )?;
            set_window_title_to_now(&self.view.output_device)?;

            self.benchmark_phase.mark_measured(report);

            // The full refresh above already shows every change the bulk update made.
            self.discard_row_changes();

            self.timers.push(schedule_report(
                report,
                self.config.benchmark.report_delay,
                self.main_thread_channel_sender.clone(),
            ));
            ok!()
        }

        fn show_report(&mut self, report: BenchmarkReport) -> CommonResult<()> {
            let prompt = AcknowledgePrompt::new(report.message());
            prompt.paint(&self.view.output_device, self.view.window_size)?;
            self.prompt = Some(prompt);
            self.benchmark_phase.mark_reported();
            tracing::info!(message = %report.message(), "main_event_loop -> report shown");
            ok!()
        }

        fn discard_row_changes(&mut self) {
            if let Some(receiver) = self.row_changes.as_mut() {
                while receiver.try_recv().is_ok() {}
            }
        }
    }
}

mod input {
    use smallvec::SmallVec;

    use super::WindowState;
    use crate::{AcknowledgePrompt, CommonResult, InputEvent, KeyPress, ListHost,
                MainThreadSignal, RedrawRequest, RowChange, VirtualList, Viewport,
                WHEEL_SCROLL_ROWS, ok, send_signal};

    impl WindowState {
        pub(super) fn handle_input_event(&mut self, input_event: InputEvent) -> CommonResult<()> {
            if let InputEvent::Resize(new_size) = input_event {
                self.view.resize(new_size, self.store.count());
                send_signal!(self.main_thread_channel_sender, MainThreadSignal::Render);
                return ok!();
            }

            // The prompt is modal: it only lets the dismiss keys and Ctrl+C through.
            if self.prompt.is_some() {
                match input_event {
                    InputEvent::Keyboard(KeyPress::Ctrl('c')) => self.request_exit(),
                    InputEvent::Keyboard(key_press)
                        if AcknowledgePrompt::is_dismiss_key(key_press) =>
                    {
                        self.dismiss_prompt()?;
                    }
                    _ => {}
                }
                return ok!();
            }

            let row_count = self.store.count();
            match input_event {
                InputEvent::Keyboard(KeyPress::Char('q') | KeyPress::Esc | KeyPress::Ctrl('c')) => {
                    self.request_exit();
                }
                InputEvent::Click { col, row } => {
                    let request =
                        self.interaction
                            .on_click(&mut self.store, &self.view.viewport, col, row)?;
                    self.redraw_after_click(request)?;
                }
                InputEvent::Keyboard(KeyPress::Up) => self.scroll(|it| it.scroll_up(1))?,
                InputEvent::Keyboard(KeyPress::Down) => {
                    self.scroll(|it| it.scroll_down(1, row_count))?;
                }
                InputEvent::Keyboard(KeyPress::PageUp) => self.scroll(|it| it.page_up())?,
                InputEvent::Keyboard(KeyPress::PageDown) => {
                    self.scroll(|it| it.page_down(row_count))?;
                }
                InputEvent::Keyboard(KeyPress::Home) => {
                    self.scroll(|it| it.scroll_to_start())?;
                }
                InputEvent::Keyboard(KeyPress::End) => {
                    self.scroll(|it| it.scroll_to_end(row_count))?;
                }
                InputEvent::ScrollUp => self.scroll(|it| it.scroll_up(WHEEL_SCROLL_ROWS))?,
                InputEvent::ScrollDown => {
                    self.scroll(|it| it.scroll_down(WHEEL_SCROLL_ROWS, row_count))?;
                }
                _ => {}
            }
            ok!()
        }

        fn request_exit(&self) {
            send_signal!(self.main_thread_channel_sender, MainThreadSignal::Exit);
        }

        fn dismiss_prompt(&mut self) -> CommonResult<()> {
            self.prompt = None;
            self.benchmark_phase.mark_acknowledged();
            tracing::info!("main_event_loop -> report acknowledged");
            self.view.clear_and_refresh(&VirtualList::new(&self.store))
        }

        /// Runs `scroll_fn` on the viewport, and repaints if the offset moved.
        fn scroll(&mut self, scroll_fn: impl FnOnce(&mut Viewport) -> bool) -> CommonResult<()> {
            if scroll_fn(&mut self.view.viewport) {
                self.view.refresh(&VirtualList::new(&self.store))?;
            }
            ok!()
        }

        /// A plain store relies on the handler's redraw request. An observable store
        /// drives the repaint from the changes it published instead.
        fn redraw_after_click(&mut self, request: Option<RedrawRequest>) -> CommonResult<()> {
            let list = VirtualList::new(&self.store);

            let Some(receiver) = self.row_changes.as_mut() else {
                if let Some(request) = request {
                    self.view.redraw(&list, request)?;
                }
                return ok!();
            };

            let mut pending: SmallVec<[RedrawRequest; 4]> = SmallVec::new();
            while let Ok(change) = receiver.try_recv() {
                let request = match change {
                    RowChange::Row(index) => RedrawRequest::Row(index),
                    RowChange::All => RedrawRequest::Full,
                };
                if pending.contains(&RedrawRequest::Full) || pending.contains(&request) {
                    continue;
                }
                if request == RedrawRequest::Full {
                    pending.clear();
                }
                pending.push(request);
            }

            for request in pending {
                self.view.redraw(&list, request)?;
            }
            ok!()
        }
    }
}
