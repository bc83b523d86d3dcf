mod router;
mod support;
mod wifi;
