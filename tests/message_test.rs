//! Tests for verbosity-gated message dispatch and the debug channel

use std::sync::{Arc, Mutex};

use rstest::rstest;

use cliapp::traits::{MemorySink, StaticArgs};
use cliapp::{AppContext, OptionsSpec, Verbosity};

/// Helper to build a context writing into an inspectable buffer
fn context() -> (AppContext, Arc<Mutex<String>>) {
    let sink = MemorySink::new();
    let buffer = sink.buffer();
    let ctx = AppContext::with_deps(
        OptionsSpec::new(),
        Box::new(sink),
        Box::new(StaticArgs::new(&[])),
    );
    (ctx, buffer)
}

fn captured(buffer: &Arc<Mutex<String>>) -> String {
    buffer.lock().unwrap().clone()
}

#[rstest]
#[case(Verbosity::Silent, Verbosity::Silent, true)]
#[case(Verbosity::Silent, Verbosity::Normal, false)]
#[case(Verbosity::Silent, Verbosity::Verbose, false)]
#[case(Verbosity::Normal, Verbosity::Silent, true)]
#[case(Verbosity::Normal, Verbosity::Normal, true)]
#[case(Verbosity::Normal, Verbosity::Verbose, false)]
#[case(Verbosity::Verbose, Verbosity::Silent, true)]
#[case(Verbosity::Verbose, Verbosity::Normal, true)]
#[case(Verbosity::Verbose, Verbosity::Verbose, true)]
fn message_is_emitted_iff_verbosity_admits_level(
    #[case] app_level: Verbosity,
    #[case] message_level: Verbosity,
    #[case] emitted: bool,
) {
    let (mut ctx, buffer) = context();
    ctx.set_verbosity(app_level);

    ctx.message_at("hello", message_level);

    let expected = if emitted { "hello" } else { "" };
    assert_eq!(captured(&buffer), expected);
}

#[test]
fn given_normal_verbosity_when_messaging_at_default_then_written() {
    let (mut ctx, buffer) = context();

    ctx.message("hello");

    assert_eq!(captured(&buffer), "hello");
}

#[test]
fn given_silent_verbosity_when_messaging_at_default_then_dropped() {
    let (mut ctx, buffer) = context();
    ctx.set_verbosity(Verbosity::Silent);

    ctx.message("hello");

    assert_eq!(captured(&buffer), "");
}

#[test]
fn given_normal_verbosity_when_messaging_at_verbose_then_dropped() {
    let (mut ctx, buffer) = context();

    ctx.message_at("x", Verbosity::Verbose);

    assert_eq!(captured(&buffer), "");
}

#[test]
fn given_verbose_default_when_messaging_then_gate_uses_the_default() {
    let (mut ctx, buffer) = context();
    ctx.set_message_default(Verbosity::Verbose);

    // App still at Normal, so a default-level message is now too detailed.
    ctx.message("detail");
    assert_eq!(captured(&buffer), "");

    ctx.set_verbosity(Verbosity::Verbose);
    ctx.message("detail");
    assert_eq!(captured(&buffer), "detail");
}

#[test]
fn given_silent_verbosity_when_writing_directly_then_still_written_verbatim() {
    let (mut ctx, buffer) = context();
    ctx.set_verbosity(Verbosity::Silent);

    ctx.write("raw output, no newline");

    assert_eq!(captured(&buffer), "raw output, no newline");
}

#[test]
fn given_debug_mode_when_debugging_then_message_fills_the_pattern_slot() {
    let (mut ctx, buffer) = context();
    ctx.set_debug_mode(true);

    ctx.debug("oops");

    assert_eq!(captured(&buffer), "[DEBUG] oops");
}

#[test]
fn given_debug_mode_off_when_debugging_then_nothing_is_written() {
    let (mut ctx, buffer) = context();

    ctx.debug("oops");

    assert_eq!(captured(&buffer), "");
}

#[test]
fn given_silent_verbosity_when_debugging_then_debug_channel_is_unaffected() {
    let (mut ctx, buffer) = context();
    ctx.set_verbosity(Verbosity::Silent);
    ctx.set_debug_mode(true);

    ctx.debug("still here");

    assert_eq!(captured(&buffer), "[DEBUG] still here");
}

#[test]
fn given_custom_pattern_when_debugging_then_custom_pattern_is_used() {
    let (mut ctx, buffer) = context();
    ctx.set_debug_mode(true);
    ctx.set_debug_pattern("dbg> {}\n");

    ctx.debug("trace me");

    assert_eq!(captured(&buffer), "dbg> trace me\n");
}

#[test]
fn messages_accumulate_in_order_through_one_sink() {
    let (mut ctx, buffer) = context();
    ctx.set_debug_mode(true);

    ctx.message("one ");
    ctx.debug("two ");
    ctx.write("three");

    assert_eq!(captured(&buffer), "one [DEBUG] two three");
}
