//! OS display enumeration. Only Windows reports monitors here; elsewhere the
//! layout has to come from the config file.

use crate::layout::Monitor;

#[cfg(windows)]
pub fn enable_per_monitor_dpi_awareness() {
    use windows::Win32::UI::HiDpi::{
        SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
    };

    unsafe {
        if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_err() {
            crate::warn!(
                "[MULTIWALL][DISPLAY] Failed to set process DPI awareness to PerMonitorV2; monitor sizes may be scaled"
            );
        }
    }
}

#[cfg(not(windows))]
pub fn enable_per_monitor_dpi_awareness() {}

#[cfg(windows)]
pub fn enumerate_monitors() -> Vec<Monitor> {
    use std::mem;

    use windows::{
        core::BOOL,
        Win32::{
            Foundation::{LPARAM, RECT},
            Graphics::Gdi::{
                EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW,
                MONITORINFOF_PRIMARY,
            },
        },
    };

    use crate::layout::Rect;

    unsafe extern "system" fn enum_monitor_proc(
        monitor: HMONITOR,
        _hdc: HDC,
        _rect: *mut RECT,
        lparam: LPARAM,
    ) -> BOOL {
        let vec = &mut *(lparam.0 as *mut Vec<Monitor>);

        let mut info: MONITORINFOEXW = mem::zeroed();
        info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

        if GetMonitorInfoW(monitor, &mut info as *mut MONITORINFOEXW as *mut _).as_bool() {
            let rc = info.monitorInfo.rcMonitor;
            vec.push(Monitor {
                index: vec.len(),
                primary: info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0,
                rect: Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top),
            });
        }

        BOOL(1)
    }

    let mut monitors = Vec::<Monitor>::new();
    unsafe {
        let _ = EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_proc),
            LPARAM((&mut monitors as *mut Vec<Monitor>) as isize),
        );
    }

    monitors
}

#[cfg(not(windows))]
pub fn enumerate_monitors() -> Vec<Monitor> {
    Vec::new()
}
