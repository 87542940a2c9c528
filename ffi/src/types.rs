//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use employee_core::error::FetchError;
use employee_core::types::Employee;

/// Opaque handle to an `EmployeeClient`. C callers receive a pointer to
/// this and pass it back into every FFI function.
pub struct FfiEmployeeClient {
    pub(crate) inner: employee_core::EmployeeClient,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// An HTTP GET request described as C-compatible plain data.
///
/// Built by `employee_build_*` functions. The C caller executes the request
/// and passes the response back through `employee_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: employee_core::HttpRequest) -> *mut Self {
        let url = CString::new(req.url).unwrap().into_raw();
        Box::into_raw(Box::new(FfiHttpRequest { url }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP
/// request, then passes a pointer to an `employee_parse_*` function. The
/// FFI layer reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiEmployeeResult`, mirroring the core fetch
/// error taxonomy plus the FFI-specific failure modes.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidUrl = 1,
    Transport = 2,
    RateLimited = 3,
    Decode = 4,
    ServerReported = 5,
    Panic = 6,
    NullArg = 7,
}

/// Tag that tells `employee_free_result` what `FfiEmployeeResult::data`
/// points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Employee = 1,
    EmployeeList = 2,
}

/// A single employee record exposed to C.
#[repr(C)]
pub struct FfiEmployee {
    pub id: u64,
    pub employee_name: *mut c_char,
    pub employee_salary: i64,
    pub employee_age: u32,
    pub profile_image: *mut c_char,
}

impl FfiEmployee {
    fn from_core(employee: Employee) -> Self {
        FfiEmployee {
            id: employee.id,
            employee_name: CString::new(employee.employee_name).unwrap().into_raw(),
            employee_salary: employee.employee_salary,
            employee_age: employee.employee_age,
            profile_image: CString::new(employee.profile_image).unwrap().into_raw(),
        }
    }
}

/// A list of employee records exposed to C.
#[repr(C)]
pub struct FfiEmployeeList {
    pub items: *mut FfiEmployee,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string suitable for direct display, and `data` is null.
#[repr(C)]
pub struct FfiEmployeeResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiEmployeeResult {
    /// Build a success result carrying a single `FfiEmployee`.
    pub(crate) fn ok_employee(employee: Employee) -> *mut Self {
        let ffi_employee = Box::new(FfiEmployee::from_core(employee));
        let result = Box::new(FfiEmployeeResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_tag: FfiDataTag::Employee,
            data: Box::into_raw(ffi_employee) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying an `FfiEmployeeList`.
    pub(crate) fn ok_employee_list(employees: Vec<Employee>) -> *mut Self {
        let len = employees.len() as u32;
        let mut ffi_employees: Vec<FfiEmployee> =
            employees.into_iter().map(FfiEmployee::from_core).collect();

        let items = if ffi_employees.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = ffi_employees.as_mut_ptr();
            std::mem::forget(ffi_employees);
            ptr
        };

        let ffi_list = Box::new(FfiEmployeeList { items, len });
        let result = Box::new(FfiEmployeeResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_tag: FfiDataTag::EmployeeList,
            data: Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build an error result from a `FetchError`. The message is the
    /// error's display form, which the host shows as-is.
    pub(crate) fn from_error(err: FetchError) -> *mut Self {
        let error_code = match &err {
            FetchError::InvalidUrl(_) => FfiErrorCode::InvalidUrl,
            FetchError::Transport { .. } => FfiErrorCode::Transport,
            FetchError::RateLimited => FfiErrorCode::RateLimited,
            FetchError::DecodeFailed { .. } => FfiErrorCode::Decode,
            FetchError::ServerReported(_) => FfiErrorCode::ServerReported,
        };

        let result = Box::new(FfiEmployeeResult {
            error_code,
            error_message: CString::new(err.to_string()).unwrap_or_default().into_raw(),
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiEmployeeResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap().into_raw(),
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiEmployeeResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}

