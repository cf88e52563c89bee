//! Find calibratable touchscreen devices.

use crate::axis::DeviceAxes;
use crate::error::Result;

use super::{DeviceDescriptor, DeviceSource, InputClass, InputDevice, Selector, ValuatorMode};

/// Outcome of a scan: how many devices qualified and the last one seen.
///
/// More than one match is not an error; callers decide how to disambiguate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub count: usize,
    pub last: Option<DeviceDescriptor>,
}

/// Scan all devices from `source` for absolute valuators with two usable axes.
///
/// With a selector only the matching device is considered. With `list_only`
/// every match is also reported at info level.
pub fn scan<S: DeviceSource + ?Sized>(
    source: &S,
    selector: Option<&Selector>,
    list_only: bool,
) -> Result<ScanResult> {
    let devices = source.devices()?;

    log::trace!("Skipping virtual master devices and devices without axis valuators.");

    let mut result = ScanResult::default();
    for device in &devices {
        if device.usage.is_virtual() {
            continue;
        }
        if let Some(selector) = selector {
            if !selector.matches(device) {
                continue;
            }
        }

        let Some(axes) = calibratable_axes(device) else {
            continue;
        };

        let descriptor = DeviceDescriptor {
            id: Some(device.id),
            name: device.name.clone(),
            axes,
        };
        if list_only {
            log::info!("Device \"{}\" id={}", descriptor.name, device.id);
        }
        result.count += 1;
        result.last = Some(descriptor);
    }

    Ok(result)
}

/// Axes 0 and 1 of the first qualifying valuator class, if any.
fn calibratable_axes(device: &InputDevice) -> Option<DeviceAxes> {
    device.classes.iter().find_map(|class| {
        let InputClass::Valuator { mode, axes } = class else {
            return None;
        };

        if *mode != ValuatorMode::Absolute {
            log::trace!(
                "Skipping device '{}' id={}, does not report Absolute events.",
                device.name,
                device.id
            );
            return None;
        }

        match axes.as_slice() {
            [x, y, ..] if x.is_calibratable() && y.is_calibratable() => Some(DeviceAxes { x: *x, y: *y }),
            _ => {
                log::trace!(
                    "Skipping device '{}' id={}, does not have two calibratable axes.",
                    device.name,
                    device.id
                );
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisRange;
    use crate::device::testing::{absolute, device, virtual_pointer, StaticSource};
    use crate::device::{DeviceId, DeviceUse};

    #[test]
    fn test_single_device_found() {
        let source = StaticSource::new(vec![device(
            9,
            "eGalax Inc. USB TouchController",
            vec![InputClass::Other, absolute(&[(0, 2047), (0, 2047)])],
        )]);

        let result = scan(&source, None, false).unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(
            result.last,
            Some(DeviceDescriptor {
                id: Some(DeviceId(9)),
                name: "eGalax Inc. USB TouchController".into(),
                axes: DeviceAxes::new(0, 2047, 0, 2047),
            })
        );
        assert_eq!(source.opened(), 1);
    }

    #[test]
    fn test_virtual_devices_skipped() {
        let mut keyboard = device(3, "Virtual core keyboard", vec![absolute(&[(0, 100), (0, 100)])]);
        keyboard.usage = DeviceUse::VirtualKeyboard;
        let source = StaticSource::new(vec![
            virtual_pointer(2, "Virtual core pointer", vec![absolute(&[(0, 1000), (0, 1000)])]),
            keyboard,
        ]);

        let result = scan(&source, None, false).unwrap();

        assert_eq!(result, ScanResult::default());
    }

    #[test]
    fn test_unsuitable_valuators_skipped() {
        let relative = device(
            4,
            "Logitech USB Optical Mouse",
            vec![InputClass::Valuator {
                mode: ValuatorMode::Relative,
                axes: vec![AxisRange::new(0, 1000), AxisRange::new(0, 1000)],
            }],
        );
        let one_axis = device(5, "Dial", vec![absolute(&[(0, 255)])]);
        let unset_x = device(6, "Unset X", vec![absolute(&[(-1, -1), (0, 1000)])]);
        let unset_y = device(7, "Unset Y", vec![absolute(&[(0, 1000), (-1, -1)])]);
        let no_classes = device(8, "Power Button", vec![InputClass::Other]);
        let source = StaticSource::new(vec![relative, one_axis, unset_x, unset_y, no_classes]);

        let result = scan(&source, None, false).unwrap();

        assert_eq!(result.count, 0);
        assert!(result.last.is_none());
    }

    #[test]
    fn test_half_unset_axis_is_calibratable() {
        let source = StaticSource::new(vec![device(10, "Half", vec![absolute(&[(-1, 500), (0, -1)])])]);

        let result = scan(&source, None, false).unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.last.unwrap().axes, DeviceAxes::new(-1, 500, 0, -1));
    }

    #[test]
    fn test_multiple_matches_keep_last() {
        let source = StaticSource::new(vec![
            device(9, "First", vec![absolute(&[(0, 100), (0, 100)])]),
            device(11, "Second", vec![absolute(&[(0, 4095), (0, 4095), (0, 255)])]),
        ]);

        let result = scan(&source, None, false).unwrap();

        assert_eq!(result.count, 2);
        let last = result.last.unwrap();
        assert_eq!(last.name, "Second");
        assert_eq!(last.axes, DeviceAxes::new(0, 4095, 0, 4095));
    }

    #[test]
    fn test_device_counted_once() {
        let source = StaticSource::new(vec![device(
            9,
            "Two valuators",
            vec![absolute(&[(0, 100), (0, 100)]), absolute(&[(0, 200), (0, 200)])],
        )]);

        let result = scan(&source, None, true).unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.last.unwrap().axes, DeviceAxes::new(0, 100, 0, 100));
    }

    #[test]
    fn test_numeric_selector_matches_id_only() {
        let source = StaticSource::new(vec![
            device(12, "Touch", vec![absolute(&[(0, 100), (0, 100)])]),
            device(13, "12", vec![absolute(&[(0, 200), (0, 200)])]),
        ]);

        let selector: Selector = "12".parse().unwrap();
        let result = scan(&source, Some(&selector), false).unwrap();

        assert_eq!(result.count, 1);
        let last = result.last.unwrap();
        assert_eq!(last.id, Some(DeviceId(12)));
        assert_eq!(last.name, "Touch");
    }

    #[test]
    fn test_name_selector() {
        let source = StaticSource::new(vec![
            device(9, "Elo TouchSystems", vec![absolute(&[(0, 4095), (0, 4095)])]),
            device(10, "Wacom Pen", vec![absolute(&[(0, 20000), (0, 15000)])]),
        ]);

        let selector = Selector::Name("Elo TouchSystems".into());
        let result = scan(&source, Some(&selector), false).unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.last.unwrap().id, Some(DeviceId(9)));
    }

    #[test]
    fn test_selector_on_unsuitable_device() {
        let source = StaticSource::new(vec![device(
            4,
            "Mouse",
            vec![InputClass::Valuator {
                mode: ValuatorMode::Relative,
                axes: vec![AxisRange::new(0, 1), AxisRange::new(0, 1)],
            }],
        )]);

        let selector = Selector::Name("Mouse".into());
        let result = scan(&source, Some(&selector), false).unwrap();

        assert_eq!(result.count, 0);
    }
}
