//! End-to-end status bar scenarios: a bar wired to a recording sink, driven
//! by host notifications the way a window would drive it.

use std::cell::RefCell;
use std::rc::Rc;

use segbar_core::SizeRequest;
use segbar_layout::{
    HostEvent, InvalidArgument, LayoutError, LayoutOptions, RoundingPolicy, SegmentBar,
};

#[derive(Debug, Clone, Default)]
struct SharedLog(Rc<RefCell<Vec<Vec<i32>>>>);

impl SharedLog {
    fn sink(&self) -> impl FnMut(&[i32]) + use<> {
        let log = Rc::clone(&self.0);
        move |edges: &[i32]| log.borrow_mut().push(edges.to_vec())
    }

    fn last(&self) -> Option<Vec<i32>> {
        self.0.borrow().last().cloned()
    }

    fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

#[test]
fn editor_status_bar_follows_window_width() {
    let log = SharedLog::default();
    let mut bar = SegmentBar::with_options(LayoutOptions::new().initial_width(400), log.sink());

    // [mode | message (grows) | position (grows x2) | encoding]
    bar.append_fixed(60).unwrap();
    bar.extend_weighted(&[1, 2]).unwrap();
    bar.append_fixed(40).unwrap();
    bar.set_all_contents(["NORMAL", "saved", "Ln 1, Col 1", "UTF-8"]).unwrap();
    // 400 - 100 = 300 leftover: 100 and 200.
    assert_eq!(log.last(), Some(vec![60, 160, 360, 400]));

    bar.handle_event(HostEvent::Resized { width: 700 }).unwrap();
    assert_eq!(log.last(), Some(vec![60, 260, 660, 700]));

    let texts: Vec<_> = bar.layout().contents().map(|c| c.copied()).collect();
    assert_eq!(
        texts,
        vec![Some("NORMAL"), Some("saved"), Some("Ln 1, Col 1"), Some("UTF-8")]
    );
}

#[test]
fn native_size_requests_drive_the_bar() {
    let log = SharedLog::default();
    let mut bar: SegmentBar<(), _> = SegmentBar::new(log.sink());
    bar.extend_weighted(&[1, 1]).unwrap();
    let published = log.len();

    let requests = [
        (SizeRequest::Restored, 100),
        (SizeRequest::MaxHide, 999),
        (SizeRequest::Minimized, 0),
        (SizeRequest::Maximized, 301),
    ];
    let mut seen = Vec::new();
    for (request, width) in requests {
        if let Some(event) = HostEvent::from_size_request(request, width) {
            bar.handle_event(event).unwrap();
            seen.push(log.last());
        }
    }

    assert_eq!(log.len(), published + 2);
    assert_eq!(
        seen,
        vec![Some(vec![50, 100]), Some(vec![50, 100]), Some(vec![151, 301])]
    );
}

#[test]
fn overflowing_fixed_segments_are_reported_as_is() {
    let log = SharedLog::default();
    let mut bar: SegmentBar<(), _> = SegmentBar::new(log.sink());
    bar.extend_fixed(&[120, 120]).unwrap();
    bar.append_weighted(1).unwrap();

    bar.handle_event(HostEvent::Resized { width: 200 }).unwrap();
    assert_eq!(log.last(), Some(vec![80, 200, 200]));

    bar.handle_event(HostEvent::Resized { width: 100 }).unwrap();
    assert_eq!(log.last(), Some(vec![-20, 100, 100]));
}

#[test]
fn rejected_host_width_keeps_previous_edges() {
    let log = SharedLog::default();
    let mut bar: SegmentBar<(), _> = SegmentBar::new(log.sink());
    bar.append_weighted(1).unwrap();
    bar.handle_event(HostEvent::Resized { width: 50 }).unwrap();
    let published = log.len();

    let err = bar.handle_event(HostEvent::Resized { width: -4 }).unwrap_err();
    assert_eq!(
        err,
        LayoutError::InvalidArgument(InvalidArgument::NegativeTotalWidth { total_width: -4 })
    );
    assert_eq!(log.len(), published);
    assert_eq!(bar.layout().layout().right_edges(), &[50]);
}

#[test]
fn fair_rounding_spreads_leftover_units() {
    let log = SharedLog::default();
    let opts = LayoutOptions::new().rounding(RoundingPolicy::LargestRemainder);
    let mut bar: SegmentBar<(), _> = SegmentBar::with_options(opts, log.sink());
    bar.extend_weighted(&[1, 1, 1]).unwrap();

    bar.recompute(101).unwrap();
    // 101 / 3 = 33 r 2: the two leftover units go to the first two segments.
    assert_eq!(log.last(), Some(vec![34, 68, 101]));
}
