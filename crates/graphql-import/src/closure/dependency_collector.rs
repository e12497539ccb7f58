use crate::ast;
use crate::closure::is_builtin_directive;
use crate::closure::is_builtin_scalar;
use crate::closure::pool_key;
use crate::closure::DefinitionUniverse;
use crate::Definition;
use crate::ImportSchemaError;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ImportSchemaError>;

/// Finds the definitions a single definition depends on that are not yet part
/// of the pool. Each discovered definition is recorded in `pool_keys` right
/// away so that it's only ever discovered once.
pub(crate) struct DependencyCollector<'a, 'b> {
    discovered: Vec<&'a Definition>,
    pool_keys: &'b mut HashSet<(bool, String)>,
    universe: &'b DefinitionUniverse<'a>,
}
impl<'a, 'b> DependencyCollector<'a, 'b> {
    pub fn new(
        universe: &'b DefinitionUniverse<'a>,
        pool_keys: &'b mut HashSet<(bool, String)>,
    ) -> Self {
        Self {
            discovered: vec![],
            pool_keys,
            universe,
        }
    }

    pub fn collect(mut self, def: &Definition) -> Result<Vec<&'a Definition>> {
        for directive in def.directives() {
            self.collect_directive(directive)?;
        }

        match def {
            Definition::Directive(_) | Definition::Scalar(_) => (),

            Definition::Enum(enum_def) => {
                for value in &enum_def.values {
                    for directive in &value.directives {
                        self.collect_directive(directive)?;
                    }
                }
            },

            Definition::InputObject(input_def) => {
                for field in &input_def.fields {
                    self.collect_input_value(field)?;
                }
            },

            Definition::Interface(iface_def) => {
                for iface_name in &iface_def.implements_interfaces {
                    self.collect_interface(iface_name)?;
                }
                for field in &iface_def.fields {
                    self.collect_field(field)?;
                }
                for impl_name in self.universe.implementations_of(&iface_def.name) {
                    if let Some(impl_def) = self.universe.type_(impl_name) {
                        self.discover(impl_def);
                    }
                }
            },

            Definition::Object(obj_def) => {
                for iface_name in &obj_def.implements_interfaces {
                    self.collect_interface(iface_name)?;
                }
                for field in &obj_def.fields {
                    self.collect_field(field)?;
                }
            },

            Definition::Schema(schema_def) => {
                let operation_types = [
                    &schema_def.query,
                    &schema_def.mutation,
                    &schema_def.subscription,
                ];
                for type_name in operation_types.into_iter().flatten() {
                    self.collect_named_type(None, type_name)?;
                }
            },

            Definition::Union(union_def) => {
                for member_name in &union_def.types {
                    self.collect_named_type(None, member_name)?;
                }
            },
        }

        Ok(self.discovered)
    }

    fn collect_directive(&mut self, directive: &ast::schema::Directive) -> Result<()> {
        let name = directive.name.as_str();
        if is_builtin_directive(name) || self.is_pooled(true, name) {
            return Ok(());
        }

        let Some(directive_def) = self.universe.directive(name) else {
            return Err(ImportSchemaError::MissingDirective {
                directive_name: name.to_string(),
            });
        };
        self.discover(directive_def);

        if let Definition::Directive(directive_def) = directive_def {
            for arg in &directive_def.arguments {
                self.collect_input_value(arg)?;
            }
        }
        Ok(())
    }

    fn collect_field(&mut self, field: &ast::schema::Field) -> Result<()> {
        self.collect_named_type(
            Some(field.name.as_str()),
            ast::schema::named_type(&field.field_type),
        )?;
        for directive in &field.directives {
            self.collect_directive(directive)?;
        }
        for arg in &field.arguments {
            self.collect_input_value(arg)?;
        }
        Ok(())
    }

    fn collect_input_value(&mut self, input_value: &ast::schema::InputValue) -> Result<()> {
        self.collect_named_type(
            Some(input_value.name.as_str()),
            ast::schema::named_type(&input_value.value_type),
        )?;
        for directive in &input_value.directives {
            self.collect_directive(directive)?;
        }
        Ok(())
    }

    fn collect_interface(&mut self, iface_name: &str) -> Result<()> {
        if self.is_pooled(false, iface_name) {
            return Ok(());
        }

        match self.universe.type_(iface_name) {
            Some(iface_def) => {
                self.discover(iface_def);
                Ok(())
            },
            None => Err(ImportSchemaError::MissingInterface {
                interface_name: iface_name.to_string(),
            }),
        }
    }

    fn collect_named_type(
        &mut self,
        field_name: Option<&str>,
        type_name: &str,
    ) -> Result<()> {
        if is_builtin_scalar(type_name) || self.is_pooled(false, type_name) {
            return Ok(());
        }

        match self.universe.type_(type_name) {
            Some(type_def) => {
                self.discover(type_def);
                Ok(())
            },
            None => Err(ImportSchemaError::MissingType {
                field_name: field_name.map(str::to_string),
                type_name: type_name.to_string(),
            }),
        }
    }

    fn discover(&mut self, def: &'a Definition) {
        let (is_directive, name) = pool_key(def);
        if self.pool_keys.insert((is_directive, name.to_string())) {
            self.discovered.push(def);
        }
    }

    fn is_pooled(&self, is_directive: bool, name: &str) -> bool {
        self.pool_keys.contains(&(is_directive, name.to_string()))
    }
}
