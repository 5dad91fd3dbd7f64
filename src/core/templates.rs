//! Literal contents of every generated file.
//!
//! The strings carry no leading or trailing newline; they are written exactly
//! as they appear here.

use crate::domain::model::{PackageDependencies, PackageManifest, PackageScripts, Template};
use crate::utils::error::Result;

/// Created under the root, in this order.
pub const SCAFFOLD_DIRECTORIES: [&str; 5] = ["controllers", "models", "routes", "middleware", "config"];

/// Placeholder files created empty when missing, before any content is written.
pub const SCAFFOLD_FILES: [&str; 3] = ["app.js", "package.json", ".env"];

pub const PACKAGE_JSON_PATH: &str = "package.json";

// The second PORT declaration shadows the destructured config value; generated
// projects have always shipped this way.
pub const APP_JS: &str = r#"const express = require('express');
const mongoose = require('mongoose');
const bodyParser = require('body-parser');
const { PORT, MONGO_URI } = require('./config');

// Middleware
const app = express();
app.use(bodyParser.json());

// Routes
const userRoutes = require('./routes/userRoutes');
app.use('/api/users', userRoutes);

// Connect to MongoDB
mongoose.connect(MONGO_URI, { useNewUrlParser: true, useUnifiedTopology: true })
  .then(() => console.log('MongoDB connected'))
  .catch(err => console.error('MongoDB connection error:', err));

const PORT = process.env.PORT || 3000;
app.listen(PORT, () => {
  console.log(`Server is running on port ${PORT}`);
});"#;

pub const ENV: &str = "PORT=3000\nMONGO_URI=mongodb://localhost:27017/mydatabase";

pub const USER_MODEL: &str = r#"const mongoose = require('mongoose');

const userSchema = new mongoose.Schema({
  name: { type: String, required: true },
  email: { type: String, required: true, unique: true },
  age: { type: Number, required: true }
});

module.exports = mongoose.model('User', userSchema);"#;

pub const USER_CONTROLLER: &str = r#"const User = require('../models/user');

// Create a new user
exports.createUser = async (req, res) => {
  try {
    const user = new User(req.body);
    await user.save();
    res.status(201).json(user);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Get all users
exports.getUsers = async (req, res) => {
  try {
    const users = await User.find();
    res.status(200).json(users);
  } catch (error) {
    res.status(500).json({ message: error.message });
  }
};

// Get a single user by ID
exports.getUserById = async (req, res) => {
  try {
    const user = await User.findById(req.params.id);
    if (user) {
      res.status(200).json(user);
    } else {
      res.status(404).json({ message: 'User not found' });
    }
  } catch (error) {
    res.status(500).json({ message: error.message });
  }
};

// Update a user by ID
exports.updateUser = async (req, res) => {
  try {
    const user = await User.findByIdAndUpdate(req.params.id, req.body, { new: true });
    if (user) {
      res.status(200).json(user);
    } else {
      res.status(404).json({ message: 'User not found' });
    }
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Delete a user by ID
exports.deleteUser = async (req, res) => {
  try {
    const user = await User.findByIdAndDelete(req.params.id);
    if (user) {
      res.status(200).json({ message: 'User deleted' });
    } else {
      res.status(404).json({ message: 'User not found' });
    }
  } catch (error) {
    res.status(500).json({ message: error.message });
  }
};"#;

pub const USER_ROUTES: &str = r#"const express = require('express');
const router = express.Router();
const userController = require('../controllers/userController');

// Create a new user
router.post('/', userController.createUser);

// Get all users
router.get('/', userController.getUsers);

// Get a single user by ID
router.get('/:id', userController.getUserById);

// Update a user by ID
router.put('/:id', userController.updateUser);

// Delete a user by ID
router.delete('/:id', userController.deleteUser);

module.exports = router;"#;

pub const APP_JS_TEMPLATE: Template = Template {
    relative_path: "app.js",
    label: "app.js",
    contents: APP_JS,
};

pub const ENV_TEMPLATE: Template = Template {
    relative_path: ".env",
    label: ".env",
    contents: ENV,
};

/// Written after the manifest, in this order.
pub const SOURCE_TEMPLATES: [Template; 3] = [
    Template {
        relative_path: "models/user.js",
        label: "user model",
        contents: USER_MODEL,
    },
    Template {
        relative_path: "controllers/userController.js",
        label: "user controller",
        contents: USER_CONTROLLER,
    },
    Template {
        relative_path: "routes/userRoutes.js",
        label: "user routes",
        contents: USER_ROUTES,
    },
];

pub fn package_manifest() -> PackageManifest {
    PackageManifest {
        name: "my-crud-api".to_string(),
        version: "1.0.0".to_string(),
        description: "A basic Express CRUD API".to_string(),
        main: "app.js".to_string(),
        scripts: PackageScripts {
            start: "node app.js".to_string(),
        },
        dependencies: PackageDependencies {
            express: "^4.17.1".to_string(),
            mongoose: "^5.9.10".to_string(),
            body_parser: "^1.19.0".to_string(),
        },
    }
}

/// Two-space indented JSON with fields in declaration order.
pub fn render_package_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&package_manifest())?)
}
