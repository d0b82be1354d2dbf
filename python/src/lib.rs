use std::cmp::Ordering;

use dictlite::{Dictlite, KeyComparator};
use pyo3::{
    exceptions::{PyKeyError, PyTypeError},
    pyclass, pymethods, pymodule,
    types::{
        PyAnyMethods, PyIterator, PyList, PyMapping, PyModule, PyTuple, PyTupleMethods,
    },
    Bound, PyAny, PyErr, PyObject, PyResult, Python,
};
use tracing::{debug, info};

/// Compares stored objects by identity (`is`).
///
#[derive(Copy, Clone, Debug, Default)]
struct ObjectIdentity;

impl KeyComparator<PyObject> for ObjectIdentity {
    #[inline]
    fn compare(&self, key1: &PyObject, key2: &PyObject) -> Ordering {
        key1.as_ptr().cmp(&key2.as_ptr())
    }
}

/// Matches stored keys against `key`: identity first, then `==`.
fn key_eq<'a>(key: &'a Bound<'a, PyAny>) -> impl 'a + FnMut(&PyObject) -> PyResult<bool> {
    move |stored| {
        if ObjectIdentity.is_same(stored, key.as_unbound()) {
            Ok(true)
        } else {
            stored.bind(key.py()).eq(key.as_unbound())
        }
    }
}

fn key_error(key: &Bound<'_, PyAny>) -> PyErr {
    // Wrap the key so that a tuple key is not unpacked into the arguments
    PyKeyError::new_err((key.clone().unbind(),))
}

fn type_name(object: &Bound<'_, PyAny>) -> String {
    // `__name__` is the bare type name, without the defining module
    object
        .get_type()
        .getattr("__name__")
        .and_then(|name| name.extract::<String>())
        .unwrap_or_else(|_| "<unknown-type>".into())
}

/// Whether `object` supports subscription like a mapping, either as a
/// registered `collections.abc.Mapping` or by defining `__getitem__`.
fn is_mapping(object: &Bound<'_, PyAny>) -> PyResult<bool> {
    if object.downcast::<PyMapping>().is_ok() {
        return Ok(true);
    }
    object.hasattr("__getitem__")
}

/// Reads every `(key, value)` pair out of a mapping.
///
fn mapping_pairs<'py>(
    other: &Bound<'py, PyAny>,
) -> PyResult<Vec<(Bound<'py, PyAny>, Bound<'py, PyAny>)>> {
    if !is_mapping(other)? {
        return Err(PyTypeError::new_err(format!(
            "Expected a mapping not a '{}'.",
            type_name(other),
        )));
    }

    other
        .call_method0("items")?
        .iter()?
        .map(|item| {
            let item = item?;
            match item.downcast::<PyTuple>() {
                Ok(pair) if pair.len() == 2 => Ok((pair.get_item(0)?, pair.get_item(1)?)),
                _ => Err(PyTypeError::new_err(format!(
                    "Expected a (key, value) pair not a '{}'.",
                    type_name(&item),
                ))),
            }
        })
        .collect()
}

type ObjectDict = Dictlite<PyObject, PyObject, ObjectIdentity>;

/// Lightweight dictionary object
///
#[pyclass(name = "Dictlite", module = "dictlite", mapping)]
pub struct PyDictlite {
    dict: ObjectDict,
}

fn insert_into(
    dict: &mut ObjectDict,
    key: &Bound<'_, PyAny>,
    value: &Bound<'_, PyAny>,
) -> PyResult<()> {
    dict.try_insert_with(key.clone().unbind(), value.clone().unbind(), key_eq(key))
        .map(drop)
}

#[pymethods]
impl PyDictlite {
    #[new]
    #[pyo3(signature = (
        /,
        mapping = None,
    ))]
    fn new(mapping: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let mut this = Self {
            dict: Dictlite::with_comparator(ObjectIdentity),
        };
        if let Some(mapping) = mapping {
            this.add_from_dict(mapping)?;
        }
        Ok(this)
    }

    fn __len__(&self) -> usize {
        self.dict.len()
    }

    fn __contains__(&self, key: &Bound<'_, PyAny>) -> PyResult<bool> {
        self.dict.try_contains_with(key_eq(key))
    }

    fn __getitem__(&self, key: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        match self.dict.try_get_with(key_eq(key))? {
            Some(value) => Ok(value.clone_ref(key.py())),
            None => Err(key_error(key)),
        }
    }

    fn __setitem__(&mut self, key: &Bound<'_, PyAny>, value: &Bound<'_, PyAny>) -> PyResult<()> {
        insert_into(&mut self.dict, key, value)
    }

    fn __delitem__(&mut self, key: &Bound<'_, PyAny>) -> PyResult<()> {
        match self.dict.try_remove_with(key_eq(key))? {
            Some(_) => Ok(()),
            None => Err(key_error(key)),
        }
    }

    fn __iter__<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyIterator>> {
        self.keys(py).as_any().iter()
    }

    fn __repr__(&self, py: Python<'_>) -> PyResult<String> {
        let mut entries = Vec::with_capacity(self.dict.len());
        for (key, value) in &self.dict {
            entries.push(format!("{}: {}", key.bind(py).repr()?, value.bind(py).repr()?));
        }
        Ok(format!("Dictlite({{{}}})", entries.join(", ")))
    }

    /// Adds the mappings contained in the given dict to this dict.
    #[pyo3(name = "addFromDict")]
    fn add_from_dict(&mut self, other: &Bound<'_, PyAny>) -> PyResult<()> {
        let pairs = mapping_pairs(other)?;
        debug!("Adding {} mappings", pairs.len());

        // A failing `__eq__` must leave this dict untouched
        let mut staged = self.dict.clone();
        for (key, value) in &pairs {
            insert_into(&mut staged, key, value)?;
        }
        self.dict = staged;
        Ok(())
    }

    #[pyo3(signature = (
        /,
        key,
        default = None,
    ))]
    fn get(&self, key: &Bound<'_, PyAny>, default: Option<PyObject>) -> PyResult<Option<PyObject>> {
        Ok(self
            .dict
            .try_get_with(key_eq(key))?
            .map(|value| value.clone_ref(key.py()))
            .or(default))
    }

    fn keys<'py>(&self, py: Python<'py>) -> Bound<'py, PyList> {
        PyList::new_bound(py, self.dict.keys().map(|key| key.clone_ref(py)))
    }

    fn values<'py>(&self, py: Python<'py>) -> Bound<'py, PyList> {
        PyList::new_bound(py, self.dict.values().map(|value| value.clone_ref(py)))
    }

    fn items<'py>(&self, py: Python<'py>) -> Bound<'py, PyList> {
        PyList::new_bound(
            py,
            self.dict
                .iter()
                .map(|(key, value)| (key.clone_ref(py), value.clone_ref(py))),
        )
    }
}

/// Lightweight dictionary object module.
#[pymodule]
#[pyo3(name = "dictlite")]
fn dictlite_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Init
    ::dictlite_core::tracer::init_once();
    info!("Welcome to dictlite!");

    // Metadata
    m.add("__author__", env!("CARGO_PKG_AUTHORS"))?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Classes
    m.add_class::<PyDictlite>()?;

    Ok(())
}
