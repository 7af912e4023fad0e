use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::same_input;
use crate::dom::{DomBinder, MountPoint, bind_entering};
use crate::error::{WidgetError, WidgetResult};
use crate::render::{HorizonChart, HorizonRenderer};

use super::{PropValidationError, WidgetConfig, WidgetProps};

/// Lifecycle position of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetState {
    Unmounted,
    Mounted,
}

/// Horizon chart widget bound to injected renderer and element binder.
///
/// The host drives it through `render_container`, `initialize`, and then any
/// number of `set_props`/`refresh` calls. `initialize` must succeed before
/// `refresh` is accepted.
pub struct ChartWidget<R: HorizonRenderer, B: DomBinder> {
    renderer: R,
    binder: B,
    config: WidgetConfig,
    props: WidgetProps,
    state: WidgetState,
    mount_point: Option<MountPoint>,
    prop_warning: Option<PropValidationError>,
    update_invocations: usize,
}

impl<R: HorizonRenderer, B: DomBinder> ChartWidget<R, B> {
    pub fn new(
        renderer: R,
        binder: B,
        config: WidgetConfig,
        props: WidgetProps,
    ) -> WidgetResult<Self> {
        config.validate()?;
        let mut widget = Self {
            renderer,
            binder,
            config,
            props,
            state: WidgetState::Unmounted,
            mount_point: None,
            prop_warning: None,
            update_invocations: 0,
        };
        widget.check_props();
        Ok(widget)
    }

    /// Creates the container element if it does not exist yet.
    pub fn render_container(&mut self) -> WidgetResult<()> {
        if self.mount_point.is_some() {
            return Ok(());
        }
        let mount = self.binder.create_container(&self.config.container_id)?;
        debug!(dom_id = mount.dom_id(), "render horizon chart container");
        self.mount_point = Some(mount);
        Ok(())
    }

    /// Mounts the widget using the thread-local random source.
    pub fn initialize(&mut self) -> WidgetResult<()> {
        self.initialize_with_rng(&mut rand::thread_rng())
    }

    /// Mounts the widget: synthesizes the demo series and renders it into
    /// one `child_class` element per entering series.
    ///
    /// The `data` property is logged but not rendered; the chart always
    /// shows the synthesized random walk. If binding or rendering fails the
    /// container is removed again and the widget stays `Unmounted`.
    pub fn initialize_with_rng<G: Rng + ?Sized>(&mut self, rng: &mut G) -> WidgetResult<()> {
        if self.state == WidgetState::Mounted {
            return Err(WidgetError::AlreadyMounted);
        }
        self.render_container()?;
        debug!(
            data_len = self.props.data.as_ref().map(|data| data.len()),
            "initialize horizon chart"
        );

        let series = self.config.demo_series.synthesize(rng);
        let chart = HorizonChart::from_config(&self.config.chart)?;

        let mount = self.mount_point.as_ref().ok_or(WidgetError::NotMounted)?;
        let renderer = &mut self.renderer;
        let bound = bind_entering(
            &mut self.binder,
            mount,
            &self.config.child_tag,
            &self.config.child_class,
            std::slice::from_ref(&series),
            |element, series| renderer.render(&element, &chart, series),
        );
        let appended = match bound {
            Ok(appended) => appended,
            Err(err) => {
                self.discard_container();
                return Err(err);
            }
        };

        debug!(
            elements = appended.len(),
            points = series.len(),
            bands = chart.bands(),
            "horizon chart mounted"
        );
        self.state = WidgetState::Mounted;
        Ok(())
    }

    /// Reacts to a property change.
    ///
    /// The update routine runs only when `data` changed by reference; equal
    /// contents in a new allocation still count as a change.
    pub fn refresh(&mut self, previous: &WidgetProps, current: &WidgetProps) -> WidgetResult<()> {
        if self.state != WidgetState::Mounted {
            return Err(WidgetError::NotMounted);
        }
        if same_input(previous.data.as_ref(), current.data.as_ref()) {
            trace!("horizon chart data unchanged");
            return Ok(());
        }
        self.update_chart(current);
        Ok(())
    }

    /// Host entry point for a new set of props.
    pub fn set_props(&mut self, props: WidgetProps) -> WidgetResult<()> {
        if self.state != WidgetState::Mounted {
            return Err(WidgetError::NotMounted);
        }
        let previous = std::mem::replace(&mut self.props, props);
        self.check_props();
        let current = self.props.clone();
        self.refresh(&previous, &current)
    }

    /// Removes the container and hands the collaborators back.
    ///
    /// The renderer is not notified; whatever it holds for the removed
    /// element stays its own concern.
    pub fn unmount(mut self) -> WidgetResult<(R, B)> {
        if let Some(mount) = self.mount_point.take() {
            debug!(dom_id = mount.dom_id(), "unmount horizon chart");
            self.binder.remove_element(mount.element())?;
        }
        Ok((self.renderer, self.binder))
    }

    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.state == WidgetState::Mounted
    }

    #[must_use]
    pub fn mount_point(&self) -> Option<&MountPoint> {
        self.mount_point.as_ref()
    }

    #[must_use]
    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn binder(&self) -> &B {
        &self.binder
    }

    /// Validation failure of the current props, if any.
    #[must_use]
    pub fn prop_warning(&self) -> Option<&PropValidationError> {
        self.prop_warning.as_ref()
    }

    /// How many times the update routine ran.
    #[must_use]
    pub fn update_invocations(&self) -> usize {
        self.update_invocations
    }

    fn check_props(&mut self) {
        self.prop_warning = self.props.validate().err();
        if let Some(err) = &self.prop_warning {
            warn!(error = %err, "horizon chart prop validation failed");
        }
    }

    /// Drops a half-built container so the next mount starts from scratch.
    fn discard_container(&mut self) {
        let Some(mount) = self.mount_point.take() else {
            return;
        };
        if let Err(err) = self.binder.remove_element(mount.element()) {
            warn!(
                error = %err,
                dom_id = mount.dom_id(),
                "failed to discard horizon chart container"
            );
        }
    }

    fn update_chart(&mut self, current: &WidgetProps) {
        self.update_invocations += 1;
        debug!(
            data_len = current.data.as_ref().map(|data| data.len()),
            "update horizon chart"
        );
        // TODO: re-render the bound element from `current.data` once mount
        // stops rendering the synthesized series.
    }
}
