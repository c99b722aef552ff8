//! 作用于当前节的操作，未设置当前节时失败

use std::fmt::Display;
use std::str::FromStr;

use super::IniReader;
use crate::document::ItemGroup;
use crate::utils::IniError;

impl IniReader {
    fn require_current(&self) -> Result<&str, IniError> {
        self.cursor.current().ok_or(IniError::NoCurrentSection)
    }

    fn require_current_owned(&self) -> Result<String, IniError> {
        self.require_current().map(str::to_string)
    }

    pub fn current_item_exists(&self, key: &str) -> bool {
        self.current_section()
            .is_some_and(|section| self.item_exists(section, key))
    }

    pub fn current_item_prefix_exists(&self, prefix: &str) -> bool {
        self.current_section()
            .is_some_and(|section| self.item_prefix_exists(section, prefix))
    }

    pub fn current_items(&self) -> Result<&ItemGroup, IniError> {
        self.get_items(self.require_current()?)
    }

    pub fn current_get_all(&self, prefix: &str) -> Result<Vec<&str>, IniError> {
        self.get_all(self.require_current()?, prefix)
    }

    pub fn current_get(&self, key: &str) -> Option<&str> {
        self.get(self.current_section()?, key)
    }

    pub fn current_get_bool(&self, key: &str) -> bool {
        self.current_get(key) == Some("true")
    }

    pub fn current_get_first(&self, prefix: &str) -> Option<&str> {
        self.get_first(self.current_section()?, prefix)
    }

    pub fn current_get_int_array<T>(
        &self,
        key: &str,
        separator: &str,
        target: &mut [T],
    ) -> Result<(), IniError>
    where
        T: FromStr + Default,
    {
        self.get_int_array(self.require_current()?, key, separator, target)
    }

    pub fn current_set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), IniError> {
        let section = self.require_current_owned()?;
        self.set(&section, key, value);
        Ok(())
    }

    pub fn current_set_bool(&mut self, key: impl Into<String>, value: bool) -> Result<(), IniError> {
        let section = self.require_current_owned()?;
        self.set_bool(&section, key, value);
        Ok(())
    }

    pub fn current_set_double(&mut self, key: impl Into<String>, value: f64) -> Result<(), IniError> {
        let section = self.require_current_owned()?;
        self.set_double(&section, key, value);
        Ok(())
    }

    pub fn current_set_long(&mut self, key: impl Into<String>, value: i64) -> Result<(), IniError> {
        let section = self.require_current_owned()?;
        self.set_long(&section, key, value);
        Ok(())
    }

    pub fn current_set_array<T: Display>(
        &mut self,
        key: impl Into<String>,
        separator: &str,
        values: &[T],
    ) -> Result<(), IniError> {
        let section = self.require_current_owned()?;
        self.set_array(&section, key, separator, values);
        Ok(())
    }

    pub fn current_erase(&mut self, key: &str) -> Result<usize, IniError> {
        let section = self.require_current_owned()?;
        self.erase(&section, key)
    }

    pub fn current_erase_first(&mut self, key: &str) -> Result<(), IniError> {
        let section = self.require_current_owned()?;
        self.erase_first(&section, key)
    }
}
