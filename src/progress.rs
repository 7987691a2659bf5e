use rayon::iter::{FromParallelIterator, IndexedParallelIterator, ParallelIterator};
use std::io::{stderr, IsTerminal};
use std::time::Instant;
use tracing::{info, info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const PBAR_TEMPLATE: &str =
    "{span_child_prefix} {msg} {percent}% {wide_bar} {per_sec} [{human_pos}/{human_len}]";

fn setup_span_bar(span: &Span, size: usize, message: &'static str) -> Span {
    span.pb_set_message(message);
    span.pb_set_style(&indicatif::ProgressStyle::default_bar().template(PBAR_TEMPLATE).unwrap());
    span.pb_set_length(size as u64);
    Span::current()
}

pub fn progress_parallel_collect<V: FromParallelIterator<T>, T: Send>(
    message: &'static str,
    iterator: impl IndexedParallelIterator<Item = T>,
) -> V {
    let total = iterator.len();
    let span = info_span!("task", items = total);
    let entered = span.enter();
    let span = setup_span_bar(&span, total, message);
    let is_term = stderr().is_terminal();

    if is_term {
        iterator
            .inspect(move |_| {
                span.pb_inc(1);
                let _ = entered;
            })
            .collect()
    } else {
        let start = Instant::now();
        let res = iterator.collect();
        info!("{message} completed in {:#.1?}", start.elapsed());
        let _ = entered;
        res
    }
}
