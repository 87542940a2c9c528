//! C-ABI wrapper around `employee-core`.
//!
//! # Overview
//! Exposes the employee fetch pipeline through `extern "C"` functions so a
//! native mobile host can build requests and parse responses without
//! linking Rust tooling. The host reads its bundled configuration resource,
//! hands the JSON to `employee_client_new`, executes the HTTP round-trip
//! itself between `employee_build_*` and `employee_parse_*`, and shows the
//! result envelope's message strings directly.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiEmployeeResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `employee_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use employee_core::config::ApiConfig;
use employee_core::http::HttpResponse;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `EmployeeClient` from the host's configuration resource,
/// passed as the raw JSON text of the bundled config.
///
/// Returns null if `config_json` is null or the configuration is
/// unreadable (missing keys, malformed JSON). The caller must free the
/// returned pointer with `employee_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn employee_client_new(config_json: *const c_char) -> *mut FfiEmployeeClient {
    catch_unwind(|| {
        if config_json.is_null() {
            return std::ptr::null_mut();
        }
        let raw = unsafe { CStr::from_ptr(config_json) }.to_bytes();
        match ApiConfig::from_json(raw) {
            Ok(config) => Box::into_raw(Box::new(FfiEmployeeClient {
                inner: employee_core::EmployeeClient::new(config),
            })),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free an `EmployeeClient` created by `employee_client_new`. Safe to call
/// with null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_client_free(client: *mut FfiEmployeeClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the HTTP request for the employee collection endpoint.
///
/// Returns null if `client` is null or the configured base URL does not
/// produce a valid request URL.
/// The caller must free the returned pointer with `employee_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn employee_build_list(client: *const FfiEmployeeClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match client.inner.build_list_employees() {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build the HTTP request for a single employee's details.
///
/// Returns null if `client` is null or the configured base URL does not
/// produce a valid request URL.
#[unsafe(no_mangle)]
pub extern "C" fn employee_build_details(
    client: *const FfiEmployeeClient,
    id: u64,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match client.inner.build_employee_details(id) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as an empty string.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_str()
            .unwrap_or("")
            .to_string()
    };
    HttpResponse {
        status: resp.status,
        body,
    }
}

/// Parse an HTTP response from a list request.
///
/// Returns a result with `data_tag = EmployeeList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn employee_parse_list(
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiEmployeeResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiEmployeeResult::null_arg("client");
        }
        if response.is_null() {
            return FfiEmployeeResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_list_employees(core_resp) {
            Ok(employees) => FfiEmployeeResult::ok_employee_list(employees),
            Err(e) => FfiEmployeeResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiEmployeeResult::panic("panic in employee_parse_list"))
}

/// Parse an HTTP response from a details request.
///
/// Returns a result with `data_tag = Employee` on success.
#[unsafe(no_mangle)]
pub extern "C" fn employee_parse_details(
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiEmployeeResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiEmployeeResult::null_arg("client");
        }
        if response.is_null() {
            return FfiEmployeeResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let core_resp = ffi_response_to_core(resp);
        match client.inner.parse_employee_details(core_resp) {
            Ok(employee) => FfiEmployeeResult::ok_employee(employee),
            Err(e) => FfiEmployeeResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiEmployeeResult::panic("panic in employee_parse_details"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by an `employee_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.url.is_null() {
            drop(unsafe { CString::from_raw(req.url) });
        }
    });
}

/// Free an `FfiEmployeeResult` returned by an `employee_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points
/// to.
#[unsafe(no_mangle)]
pub extern "C" fn employee_free_result(result: *mut FfiEmployeeResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::None => {}
                FfiDataTag::Employee => {
                    let employee = unsafe { Box::from_raw(result.data as *mut FfiEmployee) };
                    free_ffi_employee_fields(&employee);
                }
                FfiDataTag::EmployeeList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiEmployeeList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
                        };
                        for item in &items {
                            free_ffi_employee_fields(item);
                        }
                    }
                }
            }
        }
    });
}

/// Free the C-string fields of an `FfiEmployee` (but not the struct itself).
fn free_ffi_employee_fields(employee: &FfiEmployee) {
    if !employee.employee_name.is_null() {
        drop(unsafe { CString::from_raw(employee.employee_name) });
    }
    if !employee.profile_image.is_null() {
        drop(unsafe { CString::from_raw(employee.profile_image) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
