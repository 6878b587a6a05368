/// A builtin type, such as `integer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinType {
    /// The type name.
    pub name: String,
}

/// A declared variable or procedure parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSymbol {
    /// The variable name.
    pub name: String,
    /// The type the variable was declared with.
    pub ty:   BuiltinType,
}

/// A declared procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcSymbol {
    /// The procedure name.
    pub name:   String,
    /// Formal parameters, in declaration order.
    pub params: Vec<VarSymbol>,
}

/// A named entity recorded in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A builtin type.
    BuiltinType(BuiltinType),
    /// A variable or parameter.
    Variable(VarSymbol),
    /// A procedure.
    Procedure(ProcSymbol),
}

impl Symbol {
    /// The name the symbol is declared under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltinType(BuiltinType { name })
            | Self::Variable(VarSymbol { name, .. })
            | Self::Procedure(ProcSymbol { name, .. }) => name,
        }
    }

    /// Returns the builtin type if this symbol is one.
    #[must_use]
    pub const fn as_builtin_type(&self) -> Option<&BuiltinType> {
        match self {
            Self::BuiltinType(ty) => Some(ty),
            _ => None,
        }
    }
}

impl std::fmt::Display for VarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<VarSymbol(name='{}', type='{}')>", self.name, self.ty.name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuiltinType(ty) => write!(f, "<BuiltinTypeSymbol(name='{}')>", ty.name),
            Self::Variable(var) => write!(f, "{var}"),
            Self::Procedure(proc) => {
                write!(f, "<ProcedureSymbol(name='{}', parameters=[", proc.name)?;
                for (i, param) in proc.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, "])>")
            },
        }
    }
}
