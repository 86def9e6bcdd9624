use std::env;

use hostname::get as get_hostname;

/// Process-level facts shown in the right-hand status block.
pub trait ProcessEnv {
    fn login_name(&self) -> Option<String>;
    fn hostname(&self) -> Option<String>;
}

/// Reads the login name and hostname of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
    fn login_name(&self) -> Option<String> {
        ["LOGNAME", "USER", "USERNAME"]
            .iter()
            .find_map(|key| env::var(key).ok().filter(|value| !value.trim().is_empty()))
    }

    fn hostname(&self) -> Option<String> {
        if let Ok(host) = env::var("HOSTNAME")
            && !host.trim().is_empty()
        {
            return Some(host);
        }
        get_hostname()
            .ok()
            .and_then(|os| os.into_string().ok())
            .filter(|host| !host.trim().is_empty())
    }
}

/// Fixed login and hostname, for hosts that already know them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixedEnv {
    pub login_name: Option<String>,
    pub hostname: Option<String>,
}

impl FixedEnv {
    pub fn new(login_name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            login_name: Some(login_name.into()),
            hostname: Some(hostname.into()),
        }
    }
}

impl ProcessEnv for FixedEnv {
    fn login_name(&self) -> Option<String> {
        self.login_name.clone()
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }
}
