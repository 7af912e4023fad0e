use horizon_widget::core::SeriesInput;
use horizon_widget::dom::MemoryDocument;
use horizon_widget::error::WidgetError;
use horizon_widget::render::RecordingRenderer;
use horizon_widget::widget::{ChartWidget, PropValidationError, WidgetConfig, WidgetProps};

fn mounted(props: WidgetProps) -> ChartWidget<RecordingRenderer, MemoryDocument> {
    let mut widget = ChartWidget::new(
        RecordingRenderer::default(),
        MemoryDocument::new(),
        WidgetConfig::default(),
        props,
    )
    .expect("widget init");
    widget.initialize().expect("mount");
    widget
}

#[test]
fn same_reference_skips_update() {
    let data = SeriesInput::from([1.0, 2.0, 3.0]);
    let props = WidgetProps {
        data: Some(data.clone()),
    };
    let mut widget = mounted(props.clone());

    widget.refresh(&props, &props).expect("refresh");
    widget
        .set_props(WidgetProps { data: Some(data) })
        .expect("set props");

    assert_eq!(widget.update_invocations(), 0);
}

#[test]
fn equal_contents_in_new_allocation_trigger_update() {
    let mut widget = mounted(WidgetProps::new([1.0, 2.0, 3.0]));

    widget
        .set_props(WidgetProps::new([1.0, 2.0, 3.0]))
        .expect("set props");

    assert_eq!(widget.update_invocations(), 1);
}

#[test]
fn update_routine_renders_nothing() {
    let mut widget = mounted(WidgetProps::new([1.0]));
    widget.set_props(WidgetProps::new([2.0])).expect("first");
    widget.set_props(WidgetProps::new([3.0])).expect("second");

    assert_eq!(widget.update_invocations(), 2);
    assert_eq!(widget.renderer().call_count(), 1);
    assert_eq!(widget.binder().len(), 2);
}

#[test]
fn dropping_data_counts_as_change_and_warns() {
    let mut widget = mounted(WidgetProps::new([1.0]));
    widget.set_props(WidgetProps::empty()).expect("set props");

    assert_eq!(widget.update_invocations(), 1);
    assert_eq!(
        widget.prop_warning(),
        Some(&PropValidationError::MissingRequired("data"))
    );
}

#[test]
fn repeated_missing_data_keeps_a_single_warning() {
    let mut widget = mounted(WidgetProps::empty());
    for _ in 0..5 {
        widget.set_props(WidgetProps::empty()).expect("set props");
    }
    assert_eq!(
        widget.prop_warning(),
        Some(&PropValidationError::MissingRequired("data"))
    );

    widget.set_props(WidgetProps::new([1.0])).expect("restore data");
    assert_eq!(widget.prop_warning(), None);
}

#[test]
fn absent_to_absent_is_unchanged() {
    let mut widget = mounted(WidgetProps::empty());
    widget.set_props(WidgetProps::empty()).expect("set props");
    assert_eq!(widget.update_invocations(), 0);
}

#[test]
fn refresh_before_mount_is_rejected() {
    let mut widget = ChartWidget::new(
        RecordingRenderer::default(),
        MemoryDocument::new(),
        WidgetConfig::default(),
        WidgetProps::new([1.0]),
    )
    .expect("widget init");

    let original = widget.props().data.clone().expect("initial data");
    let result = widget.set_props(WidgetProps::new([2.0]));
    assert!(matches!(result, Err(WidgetError::NotMounted)));
    assert_eq!(widget.update_invocations(), 0);

    let kept = widget.props().data.as_ref().expect("data kept");
    assert!(kept.same_reference(&original));
}

#[test]
fn rejected_set_props_records_no_warning() {
    let mut widget = ChartWidget::new(
        RecordingRenderer::default(),
        MemoryDocument::new(),
        WidgetConfig::default(),
        WidgetProps::new([1.0]),
    )
    .expect("widget init");

    let result = widget.set_props(WidgetProps::empty());
    assert!(matches!(result, Err(WidgetError::NotMounted)));
    assert_eq!(widget.prop_warning(), None);
    assert!(widget.props().data.is_some());
}
